//! Tipos de dados para requisições e respostas da API Gemini.
//!
//! Todas as structs derivam `Serialize` e `Deserialize` para conversão JSON
//! conforme o formato esperado pelo endpoint `generateContent` do Google
//! Generative Language API. Os nomes de campo seguem camelCase no JSON
//! via `#[serde(rename_all = "camelCase")]`.

use serde::{Deserialize, Serialize};

/// Corpo da requisição para o endpoint `models/{model}:generateContent`.
///
/// Contém a instrução de sistema, a lista de conteúdos da conversa e a
/// configuração de geração (temperatura determinística compartilhada).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Instrução de sistema que estabelece o papel do modelo.
    pub system_instruction: Content,
    /// Conteúdos da conversa (aqui sempre um único turno de usuário).
    pub contents: Vec<Content>,
    /// Configuração de geração enviada com cada chamada.
    pub generation_config: GenerationConfig,
}

/// Um bloco de conteúdo: papel opcional ("user"/"model") e partes de texto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Papel do remetente. Ausente em instruções de sistema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Partes que compõem o conteúdo (apenas texto neste pipeline).
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Conteúdo de um turno de usuário com uma única parte de texto.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Instrução de sistema (sem papel) com uma única parte de texto.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Uma parte textual dentro de um [`Content`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Parâmetros de geração. Apenas a temperatura é relevante aqui:
/// zero por padrão, para saída totalmente determinística.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// Resposta retornada pelo endpoint `generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidatos gerados pelo modelo (normalmente um único).
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Estatísticas de uso de tokens, quando presentes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Texto do primeiro candidato, com as partes concatenadas.
    /// Retorna `None` se não houver candidatos ou partes de texto.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        if candidate.content.parts.is_empty() {
            return None;
        }
        Some(
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

/// Um candidato de resposta dentro de [`GenerateContentResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
    /// Motivo da parada da geração (ex.: "STOP", "MAX_TOKENS").
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Estatísticas de consumo de tokens para uma chamada à API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}
