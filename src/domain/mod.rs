// Domain layer: data model, pure transformations, and ports (interfaces).

pub mod facility_collection;
pub mod match_table;
pub mod model;
pub mod ports;
