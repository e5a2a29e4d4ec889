use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

fn memkit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_memkit"))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("memkit-{}-{name}", uuid::Uuid::new_v4()))
}

fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute memkit binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Basic smoke tests for CLI functionality
#[test]
fn test_cli_help() {
    let output = memkit()
        .arg("--help")
        .output()
        .expect("Failed to execute memkit binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: memkit"));
}

#[test]
fn test_gen_interactive_reference_scenario() {
    let path = temp_path("data.txt");
    let mut cmd = memkit();
    cmd.args(["gen", "--align", "right", "-o"]).arg(&path);
    let output = run_with_stdin(cmd, "4\n8\n2\n");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please input the address width: "));
    assert!(stdout.contains("Please input the strb width: "));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text
        .lines()
        .all(|line| line.len() >= 8
            && line.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))));

    let words: Vec<u128> = text
        .lines()
        .map(|line| u128::from_str_radix(line, 16).unwrap())
        .collect();
    assert_eq!(words.len(), 8);
    for (i, word) in words.iter().enumerate() {
        if i % 2 == 0 {
            assert!(*word <= 127);
        } else {
            assert!((127..=255).contains(word));
        }
    }
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_gen_default_alignment_fills_after_digits() {
    let path = temp_path("data.txt");
    let output = memkit()
        .args(["gen", "-a", "4", "-d", "8", "-s", "2", "--seed", "1", "-o"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 8);
    // Byte-sized words are at most two digits followed by six fill zeros
    assert!(text.lines().all(|line| line.len() == 8 && line.ends_with("000000")));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_gen_seed_is_reproducible() {
    let a = temp_path("a.txt");
    let b = temp_path("b.txt");
    for path in [&a, &b] {
        let status = memkit()
            .args(["gen", "-a", "12", "-d", "64", "-s", "8", "--seed", "42", "-o"])
            .arg(path)
            .status()
            .unwrap();
        assert!(status.success());
    }
    assert_eq!(
        std::fs::read_to_string(&a).unwrap(),
        std::fs::read_to_string(&b).unwrap()
    );
    std::fs::remove_file(&a).ok();
    std::fs::remove_file(&b).ok();
}

#[test]
fn test_gen_config_file() {
    let config = temp_path("gen.toml");
    let out = temp_path("mem.coe");
    std::fs::write(
        &config,
        format!(
            "address_width = 5\ndata_width = 32\nstrobe_width = 4\n\
             format = \"coe\"\noutput = {:?}\n",
            out.display().to_string()
        ),
    )
    .unwrap();

    let output = memkit()
        .args(["gen", "-c"])
        .arg(&config)
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "memory_initialization_radix = 16;");
    assert_eq!(lines[1], "memory_initialization_vector =");
    assert_eq!(lines.len(), 2 + 8);
    assert!(lines[2..].iter().all(|line| line.len() == 8));
    std::fs::remove_file(&config).ok();
    std::fs::remove_file(&out).ok();
}

#[test]
fn test_gen_non_integer_input_leaves_no_file() {
    let path = temp_path("data.txt");
    let mut cmd = memkit();
    cmd.args(["gen", "-o"]).arg(&path);
    let output = run_with_stdin(cmd, "abc\n8\n2\n");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("abc"));
    assert!(!path.exists());
}

#[test]
fn test_gen_degenerate_widths_leave_existing_file_untouched() {
    let path = temp_path("data.txt");
    std::fs::write(&path, "keep\n").unwrap();
    let output = memkit()
        .args(["gen", "-a", "2", "-d", "8", "-s", "3", "-o"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep\n");
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_gen_oversized_image_fails_cleanly() {
    let path = temp_path("data.txt");
    let output = memkit()
        .args(["gen", "-a", "32", "-d", "8", "-s", "1", "-o"])
        .arg(&path)
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("too large"));
    assert!(!path.exists());
}

#[test]
fn test_minimize_builtin_tables() {
    let output = memkit().arg("minimize").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.contains("x[")));
}

#[test]
fn test_minimize_custom_table() {
    let output = memkit()
        .args(["minimize", "-t", "0001", "--var", "a"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "And(a[0], a[1])\n");
}

#[test]
fn test_convert_program_images() {
    let code_bin = temp_path("code.bin");
    let code_data = temp_path("code.data");
    let outs: Vec<PathBuf> = ["inst.coe", "data.coe", "inst.mif", "data.mif"]
        .iter()
        .map(|name| temp_path(name))
        .collect();

    std::fs::write(&code_bin, [0x13, 0x00, 0x00, 0x00, 0x93, 0x00, 0xc0, 0x00]).unwrap();
    std::fs::write(&code_data, [0xff, 0x01]).unwrap();

    let output = memkit()
        .arg("convert")
        .arg(&code_bin)
        .arg(&code_data)
        .args(&outs)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let header = "memory_initialization_radix = 16;\nmemory_initialization_vector =\n";
    assert_eq!(
        std::fs::read_to_string(&outs[0]).unwrap(),
        format!("{header}00000013\n00c00093\n")
    );
    assert_eq!(
        std::fs::read_to_string(&outs[1]).unwrap(),
        format!("{header}000001ff\n")
    );
    assert_eq!(
        std::fs::read_to_string(&outs[2]).unwrap(),
        "00000000000000000000000000010011\n00000000110000000000000010010011\n"
    );
    assert_eq!(
        std::fs::read_to_string(&outs[3]).unwrap(),
        "00000000000000000000000111111111\n"
    );

    for path in [&code_bin, &code_data].into_iter().chain(outs.iter()) {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn test_convert_missing_input_fails() {
    let missing = temp_path("missing.bin");
    let output = memkit()
        .arg("convert")
        .arg(&missing)
        .arg(&missing)
        .args(["a", "b", "c", "d"].map(temp_path))
        .output()
        .unwrap();
    assert!(!output.status.success());
}
