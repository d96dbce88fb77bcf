//! CLI argument parsing and validation.

mod args;

pub use args::{Args, Model};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ===========================================
    // Model enum tests
    // ===========================================

    #[test]
    fn test_model_default_is_bark() {
        let model = Model::default();
        assert_eq!(model, Model::Bark);
    }

    #[test]
    fn test_model_display() {
        assert_eq!(Model::Bark.as_str(), "bark");
        assert_eq!(Model::Dia.as_str(), "dia");
    }

    #[test]
    fn test_model_ports_are_distinct() {
        assert_eq!(Model::Bark.port(), 9282);
        assert_eq!(Model::Dia.port(), 9284);
    }

    #[test]
    fn test_model_sample_rates() {
        assert_eq!(Model::Bark.sample_rate(), 24_000);
        assert_eq!(Model::Dia.sample_rate(), 44_100);
    }

    #[test]
    fn test_model_default_gaps() {
        assert_eq!(Model::Bark.default_gap_ms(), 400);
        assert_eq!(Model::Dia.default_gap_ms(), 300);
    }

    #[test]
    fn test_only_bark_uses_presets() {
        assert!(Model::Bark.uses_presets());
        assert!(!Model::Dia.uses_presets());
    }

    // ===========================================
    // Args parsing tests
    // ===========================================

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["dialogue-tts-rs", "--script", "script.json"]);

        assert_eq!(args.script.to_str(), Some("script.json"));
        assert_eq!(args.output.to_str(), Some("output.wav"));
        assert_eq!(args.model, Model::Bark);
        assert_eq!(args.lang, "en");
        assert_eq!(args.host, "localhost");
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_select_dia() {
        let args = Args::parse_from([
            "dialogue-tts-rs",
            "--script",
            "s.json",
            "--model",
            "dia",
            "--output",
            "out/dialogue.wav",
        ]);

        assert_eq!(args.model, Model::Dia);
        assert_eq!(args.output.to_str(), Some("out/dialogue.wav"));
    }

    #[test]
    fn test_args_script_is_required() {
        let result = Args::try_parse_from(["dialogue-tts-rs"]);
        assert!(result.is_err());
    }
}
