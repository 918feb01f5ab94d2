use bytes::Bytes;
use futures::stream::BoxStream;
use mime::Mime;

use crate::models::{ConvertError, Direction};

pub type DocumentStream = BoxStream<'static, Result<Bytes, ConvertError>>;

/// A converted file as handed back by the provider: its content type plus
/// the byte stream of the output. The stream is consumed exactly once while
/// the HTTP response is written.
pub struct ConvertedDocument {
    pub content_type: Mime,
    pub content: DocumentStream,
}

/// Seam between the HTTP routes and the external conversion provider.
/// Tests substitute a fake implementation here.
#[async_trait::async_trait]
pub trait IConvertService: Send + Sync {
    async fn convert(&self, file_name: &str, content: Bytes, direction: Direction) -> Result<ConvertedDocument, ConvertError>;
}
