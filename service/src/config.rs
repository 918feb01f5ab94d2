use std::env;
use std::time::Duration;

/// The provider credential is the one required setting. `None` means the
/// process must not come up.
pub fn get_api_key() -> Option<String> {
    match env::var("CLOUDCONVERT_API_KEY") {
        Ok(key) if !key.is_empty() => Some(key),
        _ => None,
    }
}

pub fn get_api_base() -> String {
    env::var("CLOUDCONVERT_API_BASE").unwrap_or_else(|_| "https://api.cloudconvert.com/v2".to_string())
}

pub fn get_port() -> u16 {
    let port = env::var("PORT").map(|port| port.parse::<u16>());
    match port {
        Ok(Ok(port)) => port,
        _ => 3001,
    }
}

pub fn get_max_upload_bytes() -> usize {
    let max_upload = env::var("MAX_UPLOAD_BYTES").map(|max_upload| max_upload.parse::<usize>());
    match max_upload {
        Ok(Ok(max_upload)) if max_upload > 0 => max_upload,
        _ => 50 * 1024 * 1024,
    }
}

pub fn get_request_timeout() -> Duration {
    let timeout = env::var("REQUEST_TIMEOUT_SECONDS").map(|timeout| timeout.parse::<u64>());
    let timeout = match timeout {
        Ok(Ok(timeout)) => timeout,
        _ => 300,
    };
    Duration::from_secs(timeout)
}
