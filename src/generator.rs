pub mod swagger_spec;
pub mod paths;
pub mod definitions;
pub mod swagger_doc;
pub mod version;
pub mod refs;

pub use swagger_spec::{
    flatten_methods,
    to_spec,
    GeneratorError,
    MethodRef,
    Result,
    SpecConverter,
    GENERATOR_NAME,
};

pub use swagger_doc::write_document;
