//! Natural language definition (NLD) generation stage.
//!
//! Wraps the [`TextGenerator`] capability with the domain-expert persona
//! and the prompt template that mandates the Aristotelian "X is a Y that Z"
//! definition form. The label disambiguates polysemous terms (a "Paraná"
//! labeled BACIA is the basin, not the river or the state). Conformance to
//! the form is a prompt-level contract with the model; the only local
//! post-processing is edge-whitespace trimming.

use crate::gemini::{GeminiError, TextGenerator};

const DEFINITION_SYSTEM_INSTRUCTION: &str = "You are a senior geoscientist and ontology \
     engineer. Your expertise is in oil and gas exploration geology, with a specific focus \
     on the carbonate reservoirs of the Brazilian Pre-Salt.";

/// Generate a definition for a corrected term, disambiguated by its label.
pub async fn define_term(
    client: &impl TextGenerator,
    corrected_term: &str,
    label: &str,
) -> Result<String, GeminiError> {
    let reply = client
        .generate(
            DEFINITION_SYSTEM_INSTRUCTION,
            &definition_prompt(corrected_term, label),
        )
        .await?;
    Ok(reply.trim().to_string())
}

fn definition_prompt(corrected_term: &str, label: &str) -> String {
    format!(
        "Generate a concise and precise Natural Language Definition (NLD) for the provided \
         term, using the assigned label as context for disambiguation.\n\
         \n\
         Mandatory Instructions:\n\
         1. The definition must strictly follow the Aristotelian structure \"X is a Y that Z\". \
         For example, \"An amount of rock is a solid consolidated earth material that is \
         constituted by an aggregate of particles made of mineral matter or material of \
         biological origin\".\n\
         2. Contextual Disambiguation: You should use the `Label` to resolve any ambiguity in \
         the term. For example, if the `Term to be defined` is \"Paraná\" and the assigned \
         `Label` is \"BACIA\", you must define the Paraná Basin, not the river or the state.\n\
         3. The definition should be technical yet clear, and a maximum of three sentences.\n\
         4. Your response must contain only the generated NLD, without any extra text.\n\
         \n\
         Term to be defined: \"{corrected_term}\"\n\
         Assigned Label: \"{label}\""
    )
}
