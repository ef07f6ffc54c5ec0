//! Command line arguments and one-shot commands

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kdm_core::{
    BoundsPreset, CalculatorState, CoreError, HIT_NOTE, MonsterField, StatBounds, StatValue,
    SurvivorField, WOUND_NOTE,
};
use thiserror::Error;

use crate::config::Config;
use crate::theme::ThemeChoice;

/// Kingdom Death: Monster roll calculator
#[derive(Parser, Debug)]
#[command(name = "kdm")]
#[command(author, version, about = "Kingdom Death: Monster roll calculator", long_about = None)]
pub struct Args {
    /// Config file (default: <config dir>/kdm/config.toml)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Force the light theme
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Force the dark theme
    #[arg(long)]
    pub dark: bool,

    /// Clamp stats to [-10, 10] instead of [-99, 99]
    #[arg(long = "legacy-bounds")]
    pub legacy_bounds: bool,

    /// Write logs to this file (filter with KDM_LOG)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the roll needed to hit
    Hit(HitArgs),
    /// Print the roll needed to wound and the critical wound range
    Wound(WoundArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct HitArgs {
    /// Survivor accuracy
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub accuracy: i32,

    /// Weapon accuracy
    #[arg(long = "weapon-accuracy", default_value_t = 0, allow_negative_numbers = true)]
    pub weapon_accuracy: i32,

    /// Monster evasion
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub evasion: i32,

    /// Attacking from the blind spot
    #[arg(long = "blind-spot")]
    pub blind_spot: bool,

    /// Monster is knocked down
    #[arg(long = "knocked-down")]
    pub knocked_down: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct WoundArgs {
    /// Weapon strength
    #[arg(long = "weapon-strength", default_value_t = 0, allow_negative_numbers = true)]
    pub weapon_strength: i32,

    /// Survivor strength
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub strength: i32,

    /// Monster toughness
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub toughness: i32,

    /// Survivor luck
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub luck: i32,

    /// Monster luck
    #[arg(long = "monster-luck", default_value_t = 0, allow_negative_numbers = true)]
    pub monster_luck: i32,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Error)]
pub enum OneShotError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl Args {
    /// Theme after applying --light/--dark over the config file
    pub fn theme_choice(&self, config: &Config) -> ThemeChoice {
        if self.light {
            ThemeChoice::Light
        } else if self.dark {
            ThemeChoice::Dark
        } else {
            config.theme
        }
    }

    /// Clamp bounds after applying --legacy-bounds over the config file
    pub fn stat_bounds(&self, config: &Config) -> StatBounds {
        if self.legacy_bounds {
            BoundsPreset::Legacy.into()
        } else {
            config.stat_bounds()
        }
    }
}

/// Run a one-shot command and return what to print
pub fn run_command(command: &Command, bounds: StatBounds) -> Result<String, OneShotError> {
    match command {
        Command::Hit(args) => run_hit(args, bounds),
        Command::Wound(args) => run_wound(args, bounds),
    }
}

fn run_hit(args: &HitArgs, bounds: StatBounds) -> Result<String, OneShotError> {
    // Inputs go through the roster so they are clamped like interactive ones.
    let state = CalculatorState::new(bounds)
        .update_survivor_field(0, SurvivorField::Accuracy, StatValue::Number(args.accuracy))?
        .update_survivor_field(
            0,
            SurvivorField::WeaponAccuracy,
            StatValue::Number(args.weapon_accuracy),
        )?
        .update_survivor_field(0, SurvivorField::BlindSpot, StatValue::Flag(args.blind_spot))?
        .update_monster_field(MonsterField::Evasion, StatValue::Number(args.evasion))?
        .update_monster_field(MonsterField::KnockedDown, StatValue::Flag(args.knocked_down))?;

    let required = state.hit_roll();
    tracing::info!(required, "hit roll computed");

    if args.json {
        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "input": state.hit_input(),
            "required_roll": required,
        }))?);
    }
    Ok(format!("Required roll: {required}+\n{HIT_NOTE}"))
}

fn run_wound(args: &WoundArgs, bounds: StatBounds) -> Result<String, OneShotError> {
    let state = CalculatorState::new(bounds)
        .update_survivor_field(
            0,
            SurvivorField::WeaponStrength,
            StatValue::Number(args.weapon_strength),
        )?
        .update_survivor_field(0, SurvivorField::Strength, StatValue::Number(args.strength))?
        .update_survivor_field(0, SurvivorField::Luck, StatValue::Number(args.luck))?
        .update_monster_field(MonsterField::Toughness, StatValue::Number(args.toughness))?
        .update_monster_field(MonsterField::Luck, StatValue::Number(args.monster_luck))?;

    let roll = state.wound_roll();
    tracing::info!(required = roll.required_roll, critical = %roll.critical, "wound roll computed");

    if args.json {
        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "input": state.wound_input(),
            "required_roll": roll.required_roll,
            "critical": roll.critical,
        }))?);
    }
    Ok(format!(
        "Required roll: {}+\nCritical wound on: {}\n{WOUND_NOTE}",
        roll.required_roll, roll.critical
    ))
}
