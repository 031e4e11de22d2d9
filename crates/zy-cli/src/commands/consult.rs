use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use rand::rngs::StdRng;

use zy_cast::Toss;
use zy_consult::{
    CastOutcome, ConsultError, Consultation, OracleClient, OracleInterpreter, Phase,
    QuestionClassifier, Topic,
};

use crate::render;

pub async fn run(
    data: &Path,
    api: &str,
    seed: Option<u64>,
    model: &str,
    auto: bool,
    pause_ms: u64,
    timeout_secs: u64,
) -> Result<(), String> {
    let canon = Arc::new(super::load_canon(data)?);
    let client = OracleClient::with_timeout(api, Duration::from_secs(timeout_secs))
        .map_err(|e| e.to_string())?;
    let mut rng = super::rng_from_seed(seed);
    let mut consultation = Consultation::new(canon).with_model(model);

    println!("  {}", "ZHOUYI".bold());
    println!("  Enter your question to begin the consultation.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        run_once(
            &mut consultation,
            &client,
            &mut rng,
            auto,
            pause_ms,
            &mut reader,
        )
        .await?;

        if !prompt_yes_no(&mut reader, "Cast again?")? {
            break;
        }
        consultation.restart();
        println!();
    }
    Ok(())
}

async fn run_once(
    consultation: &mut Consultation,
    client: &OracleClient,
    rng: &mut StdRng,
    auto: bool,
    pause_ms: u64,
    reader: &mut impl BufRead,
) -> Result<(), String> {
    // Question intake: the prompt repeats until a non-empty question.
    let request = loop {
        let Some(text) = prompt(reader, "Your question: ")? else {
            return Err("end of input before a question was entered".to_string());
        };
        match consultation.submit_question(&text) {
            Ok(request) => break request,
            Err(ConsultError::EmptyQuestion) => continue,
            Err(e) => return Err(e.to_string()),
        }
    };

    println!("  {}", "Analyzing question...".dimmed());
    let outcome = client.classify(&request.question).await;
    let _ = consultation.apply_classification(request.generation, outcome);
    show_classification(consultation);

    // Topic confirmation: enter keeps the detected topic.
    let current = consultation.topic().cloned().unwrap_or(Topic::Unknown);
    let answer = prompt(reader, &format!("Topic [{current}]: "))?.unwrap_or_default();
    if !answer.is_empty() {
        consultation
            .choose_topic(Topic::parse(&answer))
            .map_err(|e| e.to_string())?;
    }
    consultation.begin_casting().map_err(|e| e.to_string())?;
    println!();

    // Six casting steps, bottom line first.
    while consultation.phase() == Phase::Casting {
        let step = consultation.figure().len() + 1;
        let toss = next_toss(reader, rng, auto, step)?;
        if pause_ms > 0 {
            tokio::time::sleep(Duration::from_millis(pause_ms)).await;
        }
        if let CastOutcome::Cast { .. } = consultation.cast(toss).map_err(|e| e.to_string())? {
            render::print_figure(consultation.figure(), &[]);
            println!();
        }
    }

    let reading = consultation
        .reading()
        .ok_or("reading missing after resolution")?
        .clone();
    let focus: Vec<u8> = reading.focus_line().into_iter().collect();
    render::print_figure(consultation.figure(), &focus);
    println!();
    render::print_reading(&reading);

    // The one-shot interpretation request for this figure.
    let request = consultation
        .interpretation_request()
        .map_err(|e| e.to_string())?;
    println!("\n  {}", "Consulting the oracle...".dimmed());
    let outcome = client.interpret(&request).await;
    let _ = consultation.apply_interpretation(request.generation, outcome);

    match consultation.phase() {
        Phase::InterpretationReady => {
            println!("\n  {}", "ORACLE INTERPRETATION".dimmed());
            if let Some(text) = consultation.interpretation() {
                for line in text.lines() {
                    println!("  {line}");
                }
            }
        }
        Phase::InterpretationFailed => {
            if let Some(message) = consultation.interpretation_error() {
                println!("\n  {}", format!("Error: {message}").red());
            }
        }
        _ => {}
    }
    Ok(())
}

fn show_classification(consultation: &Consultation) {
    let Some(classification) = consultation.classification() else {
        return;
    };
    println!("\n  Question: \"{}\"", consultation.question());

    if classification.closed_question_notice() {
        println!(
            "  {}",
            "Notice: this reads as a yes/no question.".yellow()
        );
        println!(
            "  {}",
            "The oracle answers open questions best; consider asking \"how\" or \"what\" instead."
                .yellow()
        );
    }

    let detected = classification.detected_topic();
    let uncertain = if classification.topic_uncertain() {
        " (uncertain)"
    } else {
        ""
    };
    println!("\n  Detected topic: {detected}{uncertain}");

    if !classification.topic_alternatives.is_empty() {
        let candidates: Vec<String> = classification
            .topic_alternatives
            .iter()
            .map(|a| format!("{} ({:.0}%)", a.topic, a.confidence * 100.0))
            .collect();
        println!("  {}", format!("Candidates: {}", candidates.join(", ")).dimmed());
    }

    let labels: Vec<String> = Topic::FIXED.iter().map(Topic::to_string).collect();
    println!("  Topics: {}", labels.join(", "));
}

/// Toss three coins for the next line, letting the user reflip individual
/// coins unless auto mode is on.
fn next_toss(
    reader: &mut impl BufRead,
    rng: &mut StdRng,
    auto: bool,
    step: usize,
) -> Result<Toss, String> {
    let mut toss = Toss::random(rng);
    if auto {
        println!("  Line {step}/6: {toss}");
        return Ok(toss);
    }
    loop {
        println!("  Line {step}/6: {toss}");
        let answer = prompt(reader, "  [enter] cast · 1/2/3 reflip a coin · a auto: ")?
            .unwrap_or_default();
        match answer.as_str() {
            "" | "a" | "A" => return Ok(toss),
            "1" => {
                toss.reflip(0, rng).map_err(|e| e.to_string())?;
            }
            "2" => {
                toss.reflip(1, rng).map_err(|e| e.to_string())?;
            }
            "3" => {
                toss.reflip(2, rng).map_err(|e| e.to_string())?;
            }
            _ => println!(
                "  {}",
                "Press enter to cast, or 1/2/3 to reflip a coin.".dimmed()
            ),
        }
    }
}

/// Prompt for one trimmed line of input; `None` on end of input.
fn prompt(reader: &mut impl BufRead, text: &str) -> Result<Option<String>, String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

fn prompt_yes_no(reader: &mut impl BufRead, text: &str) -> Result<bool, String> {
    let answer = prompt(reader, &format!("\n{text} [y/N] "))?.unwrap_or_default();
    Ok(matches!(answer.as_str(), "y" | "Y" | "yes"))
}
