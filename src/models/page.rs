/// The page currently on screen. The sole driver of what is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Loading,
    Quiz,
    Result,
}
