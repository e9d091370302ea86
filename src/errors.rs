
#[derive(Debug, PartialEq, Eq)]
pub enum SearchError {
    NoRouteFound, // Frontier emptied before any node met the goal
}
