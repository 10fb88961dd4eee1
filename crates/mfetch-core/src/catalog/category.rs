use std::fmt;

/// Category subdirectory under the models directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    DiffusionModels,
    TextEncoders,
    ClipVision,
    Vae,
    Loras,
    Checkpoints,
}

impl ModelCategory {
    pub const ALL: [ModelCategory; 6] = [
        ModelCategory::DiffusionModels,
        ModelCategory::TextEncoders,
        ModelCategory::ClipVision,
        ModelCategory::Vae,
        ModelCategory::Loras,
        ModelCategory::Checkpoints,
    ];

    /// Directory name as the model loaders expect it.
    pub fn dir_name(self) -> &'static str {
        match self {
            ModelCategory::DiffusionModels => "diffusion_models",
            ModelCategory::TextEncoders => "text_encoders",
            ModelCategory::ClipVision => "clip_vision",
            ModelCategory::Vae => "vae",
            ModelCategory::Loras => "loras",
            ModelCategory::Checkpoints => "checkpoints",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
