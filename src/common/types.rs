use std::collections::HashMap;

/// Lower-cased parameter name to every raw (percent-decoded) value it was given.
pub type QueryMap = HashMap<String, Vec<Vec<u8>>>;
