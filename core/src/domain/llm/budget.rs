//! Token estimation, prompt truncation and cost estimation for completion calls.

/// One token is estimated as four characters of text.
pub const CHARS_PER_TOKEN: usize = 4;

/// Prompt plus requested output must fit in this many tokens.
pub const TOKEN_BUDGET: u32 = 2000;

pub fn estimate_tokens(text: &str) -> u32 {
    u32::try_from(text.chars().count() / CHARS_PER_TOKEN).unwrap_or(u32::MAX)
}

/// Cuts the prompt by character count so that its estimated tokens plus
/// `max_output_tokens` stay within [`TOKEN_BUDGET`].
pub fn fit_prompt(prompt: String, max_output_tokens: u32) -> String {
    let prompt_tokens = estimate_tokens(&prompt);
    if prompt_tokens.saturating_add(max_output_tokens) <= TOKEN_BUDGET {
        return prompt;
    }

    let max_chars = TOKEN_BUDGET.saturating_sub(max_output_tokens) as usize * CHARS_PER_TOKEN;
    prompt.chars().take(max_chars).collect()
}

/// Published USD prices per 1000 tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelRates {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

impl ModelRates {
    pub const GPT_35_TURBO: ModelRates = ModelRates {
        input_per_1k: 0.0015,
        output_per_1k: 0.002,
    };

    pub fn for_model(model: &str) -> Self {
        match model {
            m if m.starts_with("gpt-4o-mini") => ModelRates {
                input_per_1k: 0.00015,
                output_per_1k: 0.0006,
            },
            m if m.starts_with("gpt-4o") => ModelRates {
                input_per_1k: 0.0025,
                output_per_1k: 0.01,
            },
            m if m.starts_with("gpt-4") => ModelRates {
                input_per_1k: 0.03,
                output_per_1k: 0.06,
            },
            _ => Self::GPT_35_TURBO,
        }
    }

    pub fn cost(&self, prompt_tokens: u32, completion_tokens: u32) -> f64 {
        (f64::from(prompt_tokens) / 1000.0) * self.input_per_1k
            + (f64::from(completion_tokens) / 1000.0) * self.output_per_1k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_uses_four_chars_per_token() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abc"), 0);
        assert_eq!(estimate_tokens(&"a".repeat(400)), 100);
    }

    #[test]
    fn prompt_within_budget_is_untouched() {
        let prompt = "x".repeat(4000);
        assert_eq!(fit_prompt(prompt.clone(), 1000), prompt);
    }

    #[test]
    fn oversized_prompt_is_cut_to_remaining_budget() {
        let prompt = "y".repeat(10_000);
        let fitted = fit_prompt(prompt, 800);

        assert_eq!(fitted.chars().count(), 1200 * CHARS_PER_TOKEN);
        assert!(estimate_tokens(&fitted) + 800 <= TOKEN_BUDGET);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let prompt = "é".repeat(9000);
        let fitted = fit_prompt(prompt, 1000);
        assert_eq!(fitted.chars().count(), 4000);
    }

    #[test]
    fn gpt35_cost_matches_published_rates() {
        let cost = ModelRates::for_model("gpt-3.5-turbo").cost(1000, 1000);
        assert!((cost - 0.0035).abs() < 1e-12);
    }

    #[test]
    fn unknown_model_falls_back_to_gpt35_rates() {
        assert_eq!(ModelRates::for_model("mystery"), ModelRates::GPT_35_TURBO);
    }
}
