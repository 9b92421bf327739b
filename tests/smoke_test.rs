use contextor::{Config, FilterRules, ReportWriter, run_contextor};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;
use tokio::io::BufWriter;

#[tokio::test]
async fn it_generates_a_full_report() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().to_path_buf();

    let md_path = root.join("overview.md");
    let mut md_file = File::create(&md_path)?;
    writeln!(md_file, "# Hello")?;

    fs::write(root.join("a.py"), "print('kept')\n")?;
    fs::write(root.join("b.pyc"), "\x00\x01")?;
    fs::write(root.join(".hidden.py"), "print('hidden-marker')\n")?;
    fs::create_dir(root.join("node_modules"))?;
    fs::write(root.join("node_modules/c.py"), "print('dep-marker')\n")?;

    let output_path = root.join("report.txt");
    let config = Config {
        markdown_path: md_path,
        output_path: output_path.clone(),
        project_root: root.clone(),
        rules: FilterRules::default(),
    };

    run_contextor(config).await?;

    let contents = fs::read_to_string(&output_path)?;

    // Markdown content sits right under the generated-on header.
    let mut lines = contents.lines();
    assert!(lines.next().unwrap().starts_with("# Generated on: "));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("# Hello"));

    // Only the surviving file is rendered.
    assert!(contents.contains("# File: a.py"));
    assert!(contents.contains("```python\nprint('kept')\n```"));
    assert!(!contents.contains("hidden-marker"));
    assert!(!contents.contains("dep-marker"));
    assert!(!contents.contains("b.pyc"));

    Ok(())
}

#[tokio::test]
async fn sections_appear_in_fixed_order() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().to_path_buf();

    let md_path = root.join("overview.md");
    fs::write(&md_path, "# Project\n")?;
    fs::write(root.join("app.py"), "pass\n")?;

    let output_path = root.join("report.txt");
    let config = Config {
        markdown_path: md_path,
        output_path: output_path.clone(),
        project_root: root,
        rules: FilterRules::default(),
    };

    run_contextor(config).await?;

    let contents = fs::read_to_string(&output_path)?;
    let titles = [
        "# Project Structure",
        "# Environment Variables",
        "# Database Tables",
        "# Authentication Flow",
        "# Important Notes",
        "# Project Files Content",
    ];

    let positions: Vec<usize> = titles
        .iter()
        .map(|t| contents.find(t).unwrap_or_else(|| panic!("missing {t}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Each section title is followed by the 80-character rule.
    assert!(contents.contains(&format!("# Environment Variables\n{}", "=".repeat(80))));

    Ok(())
}

#[tokio::test]
async fn binary_content_is_omitted() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().to_path_buf();

    let md_path = root.join("overview.md");
    fs::write(&md_path, "# Binary\n")?;
    fs::write(root.join("blob.json"), b"\x00\x01\x02\xff not really json")?;
    fs::write(root.join("ok.py"), "print('ok')\n")?;

    let output_path = root.join("report.txt");
    let config = Config {
        markdown_path: md_path,
        output_path: output_path.clone(),
        project_root: root,
        rules: FilterRules::default(),
    };

    run_contextor(config).await?;

    let contents = fs::read_to_string(&output_path)?;

    // The file is still listed, but its bytes never reach the report.
    assert!(contents.contains("# File: blob.json"));
    assert!(contents.contains("```json\n(binary file omitted)\n```"));
    assert!(!contents.contains("not really json"));

    // Rendering carries on with the remaining files.
    assert!(contents.contains("```python\nprint('ok')\n```"));

    Ok(())
}

#[tokio::test]
async fn per_file_read_failure_is_reported_inline() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("ok.py"), "print('ok')\n")?;

    let output_path = root.join("report.txt");
    let file = tokio::fs::File::create(&output_path).await?;
    let mut writer = ReportWriter::new(BufWriter::new(file));

    // The first entry vanished between collection and rendering; the
    // second must still be written afterwards.
    writer
        .write_file_entry(&root.join("missing.py"), &root)
        .await?;
    writer.write_file_entry(&root.join("ok.py"), &root).await?;
    writer.flush().await?;

    let contents = fs::read_to_string(&output_path)?;

    assert!(contents.contains("# File: missing.py"));
    assert!(contents.contains("```python\nError reading file: "));
    assert!(contents.contains("# File: ok.py"));
    assert!(contents.contains("```python\nprint('ok')\n```"));

    Ok(())
}

#[tokio::test]
async fn unreadable_markdown_file_is_fatal() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().to_path_buf();

    let output_path = root.join("report.txt");
    let config = Config {
        markdown_path: root.join("does-not-exist.md"),
        output_path,
        project_root: root,
        rules: FilterRules::default(),
    };

    assert!(run_contextor(config).await.is_err());
    Ok(())
}

#[tokio::test]
async fn filter_sections_are_idempotent() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().to_path_buf();

    let md_path = root.join("overview.md");
    fs::write(&md_path, "# Same\n")?;
    fs::write(root.join("a.py"), "print('a')\n")?;
    fs::create_dir(root.join("sub"))?;
    fs::write(root.join("sub/b.sql"), "select 1;\n")?;

    let run = |output: std::path::PathBuf| {
        let config = Config {
            markdown_path: md_path.clone(),
            output_path: output,
            project_root: root.clone(),
            rules: FilterRules::default(),
        };
        run_contextor(config)
    };

    let first_path = root.join("first.txt");
    let second_path = root.join("second.txt");
    run(first_path.clone()).await?;
    run(second_path.clone()).await?;

    // Everything from the files-content header onward is byte-identical
    // across runs; only the embedded timestamps above it may differ.
    let tail = |contents: &str| {
        let idx = contents.find("# Project Files Content").unwrap();
        contents[idx..].to_string()
    };
    let first = fs::read_to_string(&first_path)?;
    let second = fs::read_to_string(&second_path)?;
    assert_eq!(tail(&first), tail(&second));

    Ok(())
}
