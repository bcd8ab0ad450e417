use std::path::Path;

use crate::core::data::drawing::Drawing;

pub trait FilePresenterPort {
    fn present(&self, drawing: &Drawing, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
