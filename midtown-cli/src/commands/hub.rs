//! Hub command - interactive menu for switching between applets

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use midtown_core::services::{CipherRequest, Phase, Player, TableService};
use midtown_core::{CipherMode, EntryPoint, LogEvent, MidtownContext, Panel};

use super::{cipher, failure_event, fallback_name, get_context, get_logger, log_event, rps, table};
use crate::output;

pub fn run() -> Result<()> {
    let mut ctx = get_context()?;
    let logger = get_logger(EntryPoint::Hub);
    log_event(&logger, LogEvent::new("hub_opened"));

    output::heading(ctx.hub.title());
    println!("Choose a solution from the menu. Thank you for choosing MidTown IT.");

    let mut items: Vec<&str> = Panel::APPLETS.iter().map(|p| p.title()).collect();
    items.push("Exit");

    loop {
        let current = Panel::APPLETS
            .iter()
            .position(|p| ctx.hub.is_visible(*p))
            .unwrap_or(0);
        let index = Select::new()
            .with_prompt("Menu")
            .items(&items)
            .default(current)
            .interact()?;

        let Some(&panel) = Panel::APPLETS.get(index) else {
            log_event(&logger, LogEvent::new("hub_closed"));
            return Ok(());
        };

        ctx.open(panel);
        log_event(&logger, LogEvent::new("panel_opened").with_applet(panel.slug()));
        output::heading(ctx.hub.title());

        // Input mistakes are reported and the user stays in the hub
        if let Err(e) = run_panel(&mut ctx, panel) {
            output::error(&e.to_string());
            log_event(
                &logger,
                failure_event("applet_failed", &e).with_applet(panel.slug()),
            );
        }
    }
}

fn run_panel(ctx: &mut MidtownContext, panel: Panel) -> Result<()> {
    match panel {
        Panel::Home => Ok(()),
        Panel::RockPaperScissors => rps_panel(ctx),
        Panel::MultiplicationTable => table_panel(ctx),
        Panel::CaesarCipher => cipher_panel(ctx),
    }
}

fn rps_panel(ctx: &mut MidtownContext) -> Result<()> {
    if ctx.rps_service.phase() == Phase::Login {
        println!("Please enter a name for P1 and P2");
        let p1: String = Input::new()
            .with_prompt("Player 1")
            .with_initial_text(ctx.config.default_player_one.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let p2: String = Input::new()
            .with_prompt("Player 2")
            .with_initial_text(ctx.config.default_player_two.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        ctx.sign_in(&p1, &p2)?;
    } else if ctx.rps_service.phase() == Phase::Postgame {
        ctx.rps_service.replay();
    }

    loop {
        let (p1, p2) = match ctx.rps_service.names() {
            Some((a, b)) => (a.to_string(), b.to_string()),
            None => return Ok(()),
        };

        let first = rps::prompt_choice(&p1)?;
        ctx.rps_service.select(Player::One, first)?;
        let second = rps::prompt_choice(&p2)?;
        if let Some(outcome) = ctx.rps_service.select(Player::Two, second)? {
            println!();
            rps::print_outcome(&outcome);
            println!();
        }

        let next = Select::new()
            .with_prompt("Play again?")
            .items(&["Play again", "Back to menu", "Quit game"])
            .default(0)
            .interact()?;
        match next {
            0 => ctx.rps_service.replay(),
            1 => return Ok(()),
            _ => {
                ctx.rps_service.quit();
                output::info("Thank you for playing!");
                return Ok(());
            }
        }
    }
}

fn table_panel(ctx: &mut MidtownContext) -> Result<()> {
    println!("Welcome to the Multiplication Table generator");
    let username: String = Input::new()
        .with_prompt("Username")
        .with_initial_text(fallback_name(ctx.config.default_player_one.as_deref(), ""))
        .allow_empty(true)
        .interact_text()?;
    let multiplier: String = Input::new()
        .with_prompt("Multiplier")
        .allow_empty(true)
        .interact_text()?;
    let rows: i64 = Input::new()
        .with_prompt(format!("Multiplicand range (1-{})", ctx.table_service.max_rows()))
        .default(ctx.table_service.default_rows())
        .interact_text()?;

    let base = TableService::parse_base(&multiplier)?;
    let generated = ctx.table_service.build(&username, base, Some(rows))?;
    println!();
    table::print_table(&generated);
    Ok(())
}

fn cipher_panel(ctx: &mut MidtownContext) -> Result<()> {
    let mode = match Select::new()
        .with_prompt("Mode")
        .items(&["Encrypt", "Decrypt"])
        .default(0)
        .interact()?
    {
        0 => CipherMode::Encrypt,
        _ => CipherMode::Decrypt,
    };
    let key: String = Input::new()
        .with_prompt("Cipher key")
        .allow_empty(true)
        .interact_text()?;
    let text = cipher::prompt_text(mode)?;
    let classic = Confirm::new()
        .with_prompt("Classic format (uppercase letters only)?")
        .default(false)
        .interact()?;

    let outcome = ctx.cipher_service.run(&CipherRequest {
        key,
        text,
        mode,
        classic,
    })?;
    println!();
    println!("{}", format!("{}ed text:", mode).bold());
    cipher::print_outcome(&outcome);
    Ok(())
}
