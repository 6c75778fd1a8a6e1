//! Interface de terminal do nldgen — barra de progresso e saída colorida.
//!
//! Usa as crates `indicatif` para a barra de progresso e `console` para
//! estilização com cores. O [`BatchProgress`] acompanha visualmente o
//! processamento de um lote de termos no terminal: uma linha por termo,
//! com o desfecho de cada um (sucesso em verde, revisão em amarelo,
//! falha em vermelho).

use std::path::Path;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::record::{ReviewReason, ReviewRecord};

/// Indicador visual de progresso para um lote de termos.
pub struct BatchProgress {
    // Barra de progresso do indicatif, dimensionada pelo total de termos.
    pb: ProgressBar,
    // Estilo verde para termos definidos com sucesso.
    green: Style,
    // Estilo vermelho para falhas de chamada.
    red: Style,
    // Estilo amarelo para termos não reconhecidos.
    yellow: Style,
}

impl BatchProgress {
    /// Inicia a barra de progresso dimensionada para `total` termos.
    pub fn start(total: usize) -> Self {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .expect("invalid template"),
        );
        Self::with_bar(pb)
    }

    /// Variante sem desenho no terminal, para uso em testes.
    pub fn hidden(total: usize) -> Self {
        let pb = ProgressBar::hidden();
        pb.set_length(total as u64);
        Self::with_bar(pb)
    }

    fn with_bar(pb: ProgressBar) -> Self {
        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Atualiza a mensagem da barra com o termo em processamento.
    pub fn record_started(&self, index: usize, total: usize, raw_term: &str) {
        self.pb
            .set_message(format!("term {}/{}: '{raw_term}'", index + 1, total));
    }

    /// Registra um termo definido com sucesso.
    pub fn routed_success(&self, corrected_term: &str) {
        self.pb.println(format!(
            "  {} '{corrected_term}' defined",
            self.green.apply_to("✓")
        ));
        self.pb.inc(1);
    }

    /// Registra um termo desviado para revisão manual, com o motivo.
    pub fn routed_review(&self, review: &ReviewRecord) {
        let (style, mark) = match review.reason {
            ReviewReason::NotRecognized => (&self.yellow, "?"),
            ReviewReason::CallFailed => (&self.red, "✗"),
        };
        self.pb.println(format!(
            "  {} '{}' sent to review: {}",
            style.apply_to(mark),
            review.original_term,
            review.reason
        ));
        self.pb.inc(1);
    }

    /// Finaliza e limpa a barra de progresso.
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Imprime o resumo final do lote: contagens e destinos gravados.
    pub fn summary(
        &self,
        success_count: usize,
        review_count: usize,
        output_path: &Path,
        review_path: Option<&Path>,
    ) {
        println!();
        println!(
            "{} {} definitions saved to '{}'",
            self.green.apply_to("✓"),
            success_count,
            output_path.display()
        );
        match review_path {
            Some(path) => println!(
                "{} {} terms marked for manual review saved to '{}'",
                self.yellow.apply_to("⚠"),
                review_count,
                path.display()
            ),
            None => println!("{} no terms required manual review", self.green.apply_to("✓")),
        }
    }
}
