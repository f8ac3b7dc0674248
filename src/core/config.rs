use std::env;

/// Everything the session needs to reach the model: endpoint,
/// credential, model id, and the fixed persona instruction. Passed in
/// explicitly at construction so the core never reads ambient state.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub system_instruction: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let api_hostname = env::var("MANATURY_API_HOST")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let api_key =
            env::var("GEMINI_API_KEY").unwrap_or_else(|_| "thiswontworkforgemini".to_string());
        let model =
            env::var("MANATURY_MODEL").unwrap_or_else(|_| "gemini-3-flash-preview".to_string());
        let system_instruction = env::var("MANATURY_SYSTEM_MESSAGE").unwrap_or_else(|_| {
            "Eres MANATURY, un asistente de viajes futurista del año 2025. Eres elegante, \
             servicial y experto en destinos globales, sostenibilidad y seguridad. Ofrece \
             respuestas detalladas y con un toque de inspiración."
                .to_string()
        });

        Self {
            api_hostname,
            api_key,
            model,
            system_instruction,
        }
    }
}
