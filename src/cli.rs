//! Interface de linha de comando do nldgen baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (run, check)
//! e flags globais (--model, --temperature, --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// nldgen — correção de termos e geração de NLDs via LLM.
#[derive(Debug, Parser)]
#[command(name = "nldgen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Identificador do modelo a usar nesta execução.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Temperatura de geração (0.0 = totalmente determinística).
    #[arg(long, global = true)]
    pub temperature: Option<f32>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Executa o lote de correção e geração de definições.
    Run {
        /// Caminho do CSV de entrada (colunas Readable_Term e Label).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Caminho do CSV de saída com as definições geradas.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Caminho do CSV de termos para revisão manual.
        #[arg(long)]
        review: Option<PathBuf>,
    },

    /// Carrega e valida o CSV de entrada sem chamar a API.
    Check {
        /// Caminho do CSV de entrada.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}
