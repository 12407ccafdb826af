/// A downloadable résumé document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    /// File name suggested to the browser when downloading.
    pub filename: String,
    pub content: Vec<u8>,
}

impl Resume {
    pub const CONTENT_TYPE: &'static str = "application/pdf";
}
