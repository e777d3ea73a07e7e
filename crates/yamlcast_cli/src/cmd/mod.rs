/// Decode a YAML file into a target type.
pub mod decode;
/// Declared-name / data-key conversion command.
pub mod names;
/// Decoded value rendering.
pub mod print;
/// Schema inspection command.
pub mod schema;
