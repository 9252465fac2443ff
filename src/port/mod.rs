//! Ports: trait seams between the application core and external collaborators.

pub mod outbound;
