//! Adapters bridging the ports to real remote collaborators.

pub mod outbound;
