//! Configuração do nldgen carregada a partir de `nldgen.toml`.
//!
//! A struct [`NldConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `GEMINI_API_KEY` tem precedência sobre o arquivo.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::NldError;

/// Configuração de nível superior carregada de `nldgen.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NldConfig {
    /// Chave da API Gemini.
    #[serde(default)]
    pub api_key: String,

    /// Identificador do modelo (ex.: "gemini-2.0-flash").
    #[serde(default)]
    pub model: String,

    /// Temperatura de geração compartilhada pelas duas etapas.
    /// Zero por padrão, para saída totalmente determinística.
    #[serde(default)]
    pub temperature: f32,

    /// Caminho do CSV de entrada (colunas Readable_Term e Label).
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Caminho do CSV de saída com as definições geradas.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Caminho do CSV de termos desviados para revisão manual.
    #[serde(default = "default_review_path")]
    pub review_path: PathBuf,

    /// Pausa de cortesia entre registros, em milissegundos.
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,
}

// Valor padrão para o CSV de entrada.
fn default_input_path() -> PathBuf {
    PathBuf::from("consolidated_ner_results.csv")
}

// Valor padrão para o CSV de definições geradas.
fn default_output_path() -> PathBuf {
    PathBuf::from("consolidated_ner_results_with_nlds.csv")
}

// Valor padrão para o CSV de revisão manual.
fn default_review_path() -> PathBuf {
    PathBuf::from("terms_for_manual_review.csv")
}

// Valor padrão para a pausa entre registros: 1000ms.
fn default_pace_ms() -> u64 {
    1000
}

impl Default for NldConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: String::new(),
            temperature: 0.0,
            input_path: default_input_path(),
            output_path: default_output_path(),
            review_path: default_review_path(),
            pace_ms: default_pace_ms(),
        }
    }
}

impl NldConfig {
    /// Carrega a configuração de `nldgen.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self, NldError> {
        Self::load_from(Path::new("nldgen.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, NldError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<NldConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração para a chave API.
        if let Ok(key) = std::env::var("GEMINI_API_KEY")
            && !key.is_empty()
        {
            config.api_key = key;
        }

        Ok(config)
    }

    /// Valida os campos obrigatórios antes de qualquer chamada à API.
    /// A ausência de credencial ou de modelo é um erro fatal de inicialização.
    pub fn validate(&self) -> Result<(), NldError> {
        if self.api_key.is_empty() {
            return Err(NldError::Config(
                "missing API credential: set GEMINI_API_KEY or api_key in nldgen.toml".into(),
            ));
        }
        if self.model.is_empty() {
            return Err(NldError::Config(
                "missing model identifier: set model in nldgen.toml or pass --model".into(),
            ));
        }
        Ok(())
    }
}
