//! Command definitions for the Pomodoro Timer.
//!
//! Uses clap derive macro for argument parsing. Running without a
//! subcommand starts the timer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::AppConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer - a tray countdown timer with three presets
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-tray",
    version,
    about = "トレイ常駐型ポモドーロタイマー",
    long_about = "作業25分・短い休憩5分・長い休憩15分の3つのプリセットを持つカウントダウンタイマー。\n\
                  ウィンドウを閉じてもトレイに常駐し、トレイの「終了」で終了します。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (runs the timer when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable the completion chime
    #[arg(long)]
    pub no_sound: bool,

    /// Audio file to play on completion instead of the built-in chime
    #[arg(long, value_name = "PATH", conflicts_with = "no_sound")]
    pub sound: Option<PathBuf>,

    /// Do not create the tray icon
    #[arg(long)]
    pub no_tray: bool,
}

impl Cli {
    /// Builds the application configuration from the flags.
    pub fn to_config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if self.no_sound {
            config = config.without_sound();
        } else if let Some(path) = &self.sound {
            config = config.with_sound_file(path);
        }
        if self.no_tray {
            config = config.without_tray();
        }
        config
    }
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the timer presets
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SoundSetting;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["pomodoro-tray"]);
            assert!(cli.command.is_none());
            assert!(!cli.verbose);
            assert!(!cli.no_sound);
            assert!(!cli.no_tray);
            assert!(cli.sound.is_none());
        }

        #[test]
        fn test_parse_verbose_flag() {
            let cli = Cli::parse_from(["pomodoro-tray", "-v"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_presets() {
            let cli = Cli::parse_from(["pomodoro-tray", "presets", "--json"]);
            assert!(matches!(cli.command, Some(Commands::Presets { json: true })));
        }

        #[test]
        fn test_parse_completions() {
            let cli = Cli::parse_from(["pomodoro-tray", "completions", "zsh"]);
            assert!(matches!(
                cli.command,
                Some(Commands::Completions {
                    shell: clap_complete::Shell::Zsh
                })
            ));
        }

        #[test]
        fn test_sound_conflicts_with_no_sound() {
            let result =
                Cli::try_parse_from(["pomodoro-tray", "--no-sound", "--sound", "/tmp/a.wav"]);
            assert!(result.is_err());
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_to_config_default() {
            let cli = Cli::parse_from(["pomodoro-tray"]);
            assert_eq!(cli.to_config(), AppConfig::default());
        }

        #[test]
        fn test_to_config_no_sound_no_tray() {
            let cli = Cli::parse_from(["pomodoro-tray", "--no-sound", "--no-tray"]);
            let config = cli.to_config();
            assert_eq!(config.sound, SoundSetting::Disabled);
            assert!(!config.tray_enabled);
        }

        #[test]
        fn test_to_config_sound_file() {
            let cli = Cli::parse_from(["pomodoro-tray", "--sound", "/tmp/bell.wav"]);
            assert_eq!(
                cli.to_config().sound,
                SoundSetting::File("/tmp/bell.wav".into())
            );
        }
    }
}
