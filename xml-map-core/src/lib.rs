//! Generic XML parsing, writing, and tree-to-mapping primitives used by
//! higher-level collection tools.

pub mod convert;
pub mod parser;
pub mod tree;
pub mod value;
pub mod writer;

pub use convert::{collect_records, element_to_value};
pub use parser::{parse, parse_file, ParseError};
pub use tree::XmlNode;
pub use value::{Record, Value};
pub use writer::{write, write_file, WriteError};
