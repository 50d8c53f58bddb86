use plasver_core::{resolve, resolve_lossy, ResolverConfig, VersionSource};

fn is_own_flag(arg: &str) -> bool {
    matches!(arg, "--var" | "--probe" | "--runtime" | "--lossy" | "--json")
}

fn main() {
    // Cargar .env si existe para obtener el override (p. ej. PYTHON)
    let _ = dotenvy::dotenv();
    // CLI mínima: `plasver resolve [--var <NAME>] [--probe <PROGRAM> [ARGS..]] [--runtime] [--lossy] [--json]`
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && args[1] == "resolve" {
        let mut var: Option<String> = None;
        let mut probe: Option<(String, Vec<String>)> = None;
        let mut runtime = false;
        let mut lossy = false;
        let mut json = false;
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--var" => {
                    i += 1;
                    if i < args.len() { var = Some(args[i].clone()); }
                }
                "--probe" => {
                    i += 1;
                    if i < args.len() {
                        let program = args[i].clone();
                        let mut probe_args = Vec::new();
                        // argumentos de la sonda (p. ej. `--version`) hasta la
                        // siguiente flag propia de plasver
                        while i + 1 < args.len() && !is_own_flag(&args[i + 1]) {
                            i += 1;
                            probe_args.push(args[i].clone());
                        }
                        probe = Some((program, probe_args));
                    }
                }
                "--runtime" => { runtime = true; }
                "--lossy" => { lossy = true; }
                "--json" => { json = true; }
                _ => {
                    eprintln!("Uso: plasver resolve [--var <NAME>] [--probe <PROGRAM> [ARGS..]] [--runtime] [--lossy] [--json]");
                    std::process::exit(2);
                }
            }
            i += 1;
        }

        let mut config = match var {
            Some(v) => ResolverConfig::from_env_var(&v),
            None => ResolverConfig::from_env(),
        };
        if runtime {
            config = config.with_source(VersionSource::Runtime);
        }
        if let Some((program, probe_args)) = probe {
            config = config.with_source(VersionSource::Command { program, args: probe_args });
        }

        let mut diag = std::io::stderr();
        let resolution = if lossy {
            resolve_lossy(config, &mut diag)
        } else {
            match resolve(config, &mut diag) {
                Ok(r) => r,
                Err(e) => { eprintln!("[plasver resolve] error: {e}"); std::process::exit(5); }
            }
        };

        if json {
            match serde_json::to_string(&resolution) {
                Ok(s) => println!("{s}"),
                Err(e) => { eprintln!("[plasver resolve] json error: {e}"); std::process::exit(5); }
            }
        } else {
            // Línea NAME=value que el shell invocante puede exportar
            println!("{}", resolution.assignment());
        }
        std::process::exit(0);
    } else {
        println!("plasver: use 'resolve' subcommand");
    }
}
