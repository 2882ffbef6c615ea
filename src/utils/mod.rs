mod data;

pub use data::yaml_to_json;
