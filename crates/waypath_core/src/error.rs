use thiserror::Error;

use crate::{graph::Weight, priority_queue::PriorityQueueError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Unknown node \"{0}\"")]
    UnknownNode(String),
    #[error("Unknown algorithm \"{0}\"")]
    UnknownAlgorithm(String),
    #[error("Invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },
    #[error("No path found from {start} to {end}")]
    NoPathFound { start: String, end: String },
    /// The priority queue ran dry while a solver still expected an element.
    /// This is a solver bug, callers should never see it.
    #[error("Priority queue is empty")]
    EmptyQueue,
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("{algorithm} exceeded its deadline")]
    DeadlineExceeded { algorithm: String },
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),
    #[error("{from} -> {to} is not an edge of the graph")]
    NotAnEdge { from: String, to: String },
}

impl RoutingError {
    pub(crate) fn no_path(start: &str, end: &str) -> Self {
        RoutingError::NoPathFound {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

impl From<PriorityQueueError> for RoutingError {
    fn from(error: PriorityQueueError) -> Self {
        match error {
            PriorityQueueError::Empty => RoutingError::EmptyQueue,
            PriorityQueueError::ElementAlreadyExists(element) => RoutingError::InvalidParameter(
                format!("element {element} is already in the priority queue"),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoutingError>;
