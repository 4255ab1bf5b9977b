//! Interactive countdown driven by line commands on stdin.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use studenthub_core::{CountdownTimer, TimerTicker, TimerView};

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const BAR_WIDTH: usize = 30;

pub fn run() -> Result<()> {
    println!("commands: start | pause | reset | quit");
    let mut ticker = TimerTicker::new(CountdownTimer::new(), TICK_INTERVAL, draw);
    ticker.render_now();

    for line in io::stdin().lock().lines() {
        match line?.trim() {
            "start" | "s" => ticker.start(),
            "pause" | "p" => {
                ticker.pause();
                ticker.render_now();
            }
            "reset" | "r" => ticker.reset(),
            "quit" | "q" => break,
            "" => ticker.render_now(),
            other => println!("unknown command `{other}`"),
        }
    }
    Ok(())
}

fn draw(view: &TimerView) {
    let filled = (view.progress * BAR_WIDTH as f64).round() as usize;
    let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH.saturating_sub(filled));
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{:>6} [{bar}] {:>3.0}%", view.label, view.progress * 100.0);
    let _ = out.flush();
}
