pub mod common;
pub mod deadline;
pub mod election;
pub mod info;
pub mod view;
