//! Interactive menu loop.
//!
//! Reads commands line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so the loop can be driven from tests. Invalid
//! input prints the error and asks again; it never changes session state.
//! End of input ends the loop like `q`.

use super::session::Session;
use crate::error::Result;
use crate::presenter::format_temperature;
use crate::sensors::{Alert, parse_threshold};
use crate::units::TemperatureScale;
use std::io::{BufRead, Write};

const MENU: &str = "\
<==================== Weather Monitor ====================>
Menu:
1. Collect weather data (remote/local)
2. Add a temperature alert threshold
3. Change data source (remote/local)
4. Show latest weather data
5. Show weather condition
6. Set display scale (Celsius/Fahrenheit/Kelvin)
7. Check alerts now
Enter 'q' to quit.";

/// Run the menu until the user quits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Weather monitoring and alert system")?;

    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = prompt(input, output, "Choose an action: ")? else {
            break;
        };

        match choice.as_str() {
            "q" | "Q" => break,
            "1" => {
                if !collect_from_source(session, input, output, false)? {
                    break;
                }
            }
            "2" => {
                if !add_alert(session, input, output)? {
                    break;
                }
            }
            "3" => {
                if !collect_from_source(session, input, output, true)? {
                    break;
                }
            }
            "4" => writeln!(output, "{}", session.render())?,
            "5" => writeln!(output, "{}", session.render_condition())?,
            "6" => {
                let Some(name) = prompt(input, output, "Enter display scale: ")? else {
                    break;
                };
                session.set_display_scale(&name);
                writeln!(output, "Display scale set to '{}'.", session.display_scale())?;
            }
            "7" => {
                let alerts = session.check_alerts();
                if alerts.is_empty() {
                    writeln!(output, "No alerts.")?;
                } else {
                    print_alerts(output, &alerts)?;
                }
            }
            _ => writeln!(output, "Invalid choice. Please select a valid menu item.")?,
        }
    }

    writeln!(output, "Goodbye.")?;
    Ok(())
}

/// Print `text`, then read one trimmed line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_alerts<W: Write>(output: &mut W, alerts: &[Alert]) -> Result<()> {
    for alert in alerts {
        writeln!(output, "ALERT: {}", alert)?;
    }
    Ok(())
}

/// Ask for a source until a valid one is given, then collect from it.
/// `switching` only changes the confirmation text. Returns `false` if input
/// ended.
fn collect_from_source<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    switching: bool,
) -> Result<bool> {
    loop {
        let Some(name) = prompt(input, output, "Select data source (remote/local): ")? else {
            return Ok(false);
        };
        match session.select_source(&name) {
            Ok(kind) => {
                let outcome = session.collect();
                if switching {
                    writeln!(output, "Switched to the {} source and collected data.", kind)?;
                } else {
                    writeln!(output, "Collected data from the {} source.", kind)?;
                }
                print_alerts(output, &outcome.alerts)?;
                return Ok(true);
            }
            Err(e) => writeln!(output, "Invalid choice: {}", e)?,
        }
    }
}

/// Ask for a threshold and its unit, re-prompting on bad input.
/// Returns `false` if input ended.
fn add_alert<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let threshold = loop {
        let Some(raw) = prompt(input, output, "Enter temperature threshold: ")? else {
            return Ok(false);
        };
        match parse_threshold(&raw) {
            Ok(_) => break raw,
            Err(e) => writeln!(output, "{}", e)?,
        }
    };

    loop {
        let Some(unit) = prompt(
            input,
            output,
            "Threshold unit (Celsius/Fahrenheit/Kelvin) [Celsius]: ",
        )?
        else {
            return Ok(false);
        };
        match session.add_alert(&threshold, &unit) {
            Ok(listener) => {
                let (value, scale) = listener.entered_threshold();
                writeln!(
                    output,
                    "Alert #{} set: warn below {}{} ({}).",
                    listener.id(),
                    value,
                    scale.suffix(),
                    format_temperature(listener.threshold_celsius(), TemperatureScale::Celsius)
                )?;
                return Ok(true);
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}
