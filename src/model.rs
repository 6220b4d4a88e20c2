//! @ai:module:intent Classifier architectures under comparison
//! @ai:module:layer domain
//! @ai:module:public_api ModelArch, PROCESSING_ORDER, DISPLAY_ORDER
//! @ai:module:stateless true

/// @ai:intent CNN architecture passed to the classifier script via --arch
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelArch {
    Vgg,
    Alexnet,
    Resnet,
}

/// Order in which the classifier is run and results are recorded.
pub const PROCESSING_ORDER: [ModelArch; 3] = [ModelArch::Vgg, ModelArch::Alexnet, ModelArch::Resnet];

/// Row order of the rendered results table.
pub const DISPLAY_ORDER: [ModelArch; 3] = [ModelArch::Resnet, ModelArch::Alexnet, ModelArch::Vgg];

impl ModelArch {
    /// @ai:intent Argument value understood by the classifier script
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelArch::Vgg => "vgg",
            ModelArch::Alexnet => "alexnet",
            ModelArch::Resnet => "resnet",
        }
    }

    /// @ai:intent Human-facing architecture name used in the image table
    /// @ai:effects pure
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelArch::Vgg => "VGG",
            ModelArch::Alexnet => "AlexNet",
            ModelArch::Resnet => "ResNet",
        }
    }

    /// Upper-cased key, as printed in console output.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl std::fmt::Display for ModelArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
