pub mod ant_colony_params;
pub mod ant_colony_solver;
pub mod pheromone_matrix;
