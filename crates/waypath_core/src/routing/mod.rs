pub mod algorithm;
pub mod ant_colony;
pub mod astar;
pub mod astar_heuristic;
pub mod comparator;
pub mod dijkstra;
pub mod fringe_search;
pub mod registry;
pub mod routing_path;
pub(crate) mod search_state;
pub mod shortest_path_algorithm;
