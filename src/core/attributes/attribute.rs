use std::any::Any;
use std::sync::Arc;

pub type AttributeRef = Arc<dyn Attribute + Send + Sync>;

pub trait Attribute: Any {
    fn name(&self) -> String;

    fn as_any(&self) -> &dyn Any;
}
