#[derive(Debug, Clone)]
pub struct BannerConfig {
    pub greeting: String,
    pub description: String,
    pub args_label: String,
    pub system_header: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello from BBDemo!".to_string(),
            description: "This is a custom application built with Yocto/BitBake.".to_string(),
            // trailing space is part of the label, tokens follow directly
            args_label: "Arguments received: ".to_string(),
            system_header: "System information:".to_string(),
        }
    }
}
