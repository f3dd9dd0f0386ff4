#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub uppercase: Option<String>,
    pub lowercase: Option<String>,
    pub numbers: Option<String>,
    pub symbols: Option<String>,
}
