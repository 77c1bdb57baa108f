/// Side effects requested by the handler and performed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Bell,
    Quit,
}
