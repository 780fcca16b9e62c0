use zof::{
    bisection, fixed_point, modified_secant, newton_raphson, regula_falsi, secant, Solution,
    SolveError, DEFAULT_DELTA, DEFAULT_MAX_ITER, DEFAULT_TOL,
};

type Editor = rustyline::Editor<()>;

const METHODS: [(&str, &str); 6] = [
    ("1", "Bisection"),
    ("2", "Regula Falsi"),
    ("3", "Secant"),
    ("4", "Newton-Raphson"),
    ("5", "Fixed Point"),
    ("6", "Modified Secant"),
];

// None on EOF/interrupt: unwind back to main and quit
fn prompt(rl: &mut Editor, msg: &str) -> Option<String> {
    let line = rl.readline(msg).ok()?;
    rl.add_history_entry(line.as_str());
    Some(line.trim().to_string())
}

fn prompt_f64(rl: &mut Editor, msg: &str, default: Option<f64>) -> Option<f64> {
    loop {
        let line = prompt(rl, msg)?;
        if line.is_empty() {
            if let Some(d) = default {
                return Some(d);
            }
        } else if let Ok(v) = line.parse::<f64>() {
            return Some(v);
        }
        println!("Invalid number, try again.");
    }
}

fn prompt_usize(rl: &mut Editor, msg: &str, default: usize) -> Option<usize> {
    loop {
        let line = prompt(rl, msg)?;
        if line.is_empty() {
            return Some(default);
        } else if let Ok(v) = line.parse::<usize>() {
            return Some(v);
        }
        println!("Invalid number, try again.");
    }
}

fn report(method: &str, fixed: bool, outcome: Result<Solution, SolveError>) {
    match outcome {
        Err(e) => println!("Error during computation: {}", e),
        Ok(sol) => {
            if fixed {
                println!("\nEstimated fixed point: {}", sol.root);
                println!("Final error ~ {}", sol.residual);
            } else {
                println!("\nEstimated root: {}", sol.root);
                println!("f(root) ~ {}", sol.residual);
            }
            let note = if sol.converged { "" } else { " (iteration limit reached)" };
            println!("Iterations: {}{}", sol.iterations, note);
            println!("\n--- Iteration history for {} ---", method);
            for step in &sol.history {
                println!("{}", step);
            }
        }
    }
}

fn run(rl: &mut Editor, choice: &str, method: &str) -> Option<()> {
    println!("Selected: {}", method);
    let expr = if choice == "5" {
        println!("NOTE: for Fixed Point, provide g(x) such that x = g(x).");
        prompt(rl, " g(x) = ")?
    } else {
        prompt(rl, " f(x) = ")?
    };
    let tol = prompt_f64(rl, "Tolerance (default 1e-6): ", Some(DEFAULT_TOL))?;
    let max_iter = prompt_usize(rl, "Maximum iterations (default 50): ", DEFAULT_MAX_ITER)?;

    match choice {
        "1" | "2" => {
            let a = prompt_f64(rl, "Left bracket a: ", None)?;
            let b = prompt_f64(rl, "Right bracket b: ", None)?;
            let outcome = if choice == "1" {
                bisection(&expr, a, b, tol, max_iter)
            } else {
                regula_falsi(&expr, a, b, tol, max_iter)
            };
            report(method, false, outcome);
        }
        "3" => {
            let x0 = prompt_f64(rl, "x0: ", None)?;
            let x1 = prompt_f64(rl, "x1: ", None)?;
            report(method, false, secant(&expr, x0, x1, tol, max_iter));
        }
        "4" => {
            let x0 = prompt_f64(rl, "Initial guess x0: ", None)?;
            report(method, false, newton_raphson(&expr, x0, tol, max_iter));
        }
        "5" => {
            let x0 = prompt_f64(rl, "Initial guess x0: ", None)?;
            report(method, true, fixed_point(&expr, x0, tol, max_iter));
        }
        "6" => {
            let x0 = prompt_f64(rl, "Initial guess x0: ", None)?;
            let delta = prompt_f64(rl, "Delta (default 1e-3): ", Some(DEFAULT_DELTA))?;
            report(method, false, modified_secant(&expr, x0, delta, tol, max_iter));
        }
        _ => unreachable!(),
    }
    Some(())
}

fn main() {
    println!("Zero of Functions (zof)");
    let mut rl = Editor::new();
    loop {
        println!("\nSelect method:");
        for (key, name) in METHODS.iter() {
            println!("{}. {}", key, name);
        }
        println!("q. Quit");
        let Some(choice) = prompt(&mut rl, "Enter choice: ") else {
            break;
        };
        if choice == "q" {
            println!("Exiting.");
            break;
        }
        let Some(&(_, method)) = METHODS.iter().find(|(key, _)| *key == choice) else {
            println!("Invalid choice. Try again.");
            continue;
        };
        if run(&mut rl, &choice, method).is_none() {
            break;
        }
    }
}
