#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrapeEntry {
    pub complete: u64,
    pub incomplete: u64,
    pub downloaded: u64,
}
