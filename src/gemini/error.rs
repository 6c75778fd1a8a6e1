//! Tipos de erro para o cliente da API Gemini.
//!
//! Define [`GeminiError`] com variantes para rate limiting, erros da API,
//! respostas vazias e erros de rede. Usa `thiserror` para derivar `Display`
//! e `Error` automaticamente a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao interagir com a API Gemini.
///
/// As variantes cobrem os cenários de falha relevantes para o pipeline:
/// - [`RateLimited`](GeminiError::RateLimited) — o servidor retornou HTTP 429
/// - [`ApiError`](GeminiError::ApiError) — qualquer outro erro HTTP (4xx/5xx)
/// - [`EmptyResponse`](GeminiError::EmptyResponse) — resposta sem candidatos de texto
/// - [`Network`](GeminiError::Network) — falha na camada de rede
#[derive(Debug, Error)]
pub enum GeminiError {
    /// O servidor retornou HTTP 429 (rate limit).
    /// O campo `retry_after_ms` indica quantos milissegundos esperar antes de retentar.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Erro retornado pela API (ex.: 400 requisição inválida, 403 chave inválida).
    /// Contém o código de status HTTP e a mensagem de erro do corpo da resposta.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// A API respondeu 200 mas sem nenhum bloco de texto utilizável
    /// (lista de candidatos vazia ou candidato sem partes de texto).
    #[error("empty response: no text candidates returned")]
    EmptyResponse,

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
