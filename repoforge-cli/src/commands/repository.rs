//! Repository command handlers

use anyhow::{Context, Result};
use colored::*;
use repoforge_client::RepoforgeClient;
use repoforge_core::domain::batch::BatchResult;
use repoforge_core::domain::repository::{CreationRequest, CreationResult, RepoDescriptor};

use crate::config::Config;

/// Create a single repository
pub async fn create_repository(
    config: &Config,
    name: String,
    description: Option<String>,
) -> Result<()> {
    let client = RepoforgeClient::new(&config.server_url);
    let request = CreationRequest { name, description };

    let repo = client
        .create_repository(&request)
        .await
        .context("Failed to create repository")?;

    println!("{}", "✓ Repository created successfully!".green().bold());
    print_repo(&repo);

    Ok(())
}

/// Create a batch of repositories from names and/or a JSON file
pub async fn create_repositories(
    config: &Config,
    names: Vec<String>,
    file: Option<String>,
) -> Result<()> {
    let requests = build_requests(names, file.as_deref())?;
    if requests.is_empty() {
        anyhow::bail!("No repositories given: pass names or --file");
    }

    let client = RepoforgeClient::new(&config.server_url);
    let batch = client
        .create_repositories(&requests)
        .await
        .context("Failed to create repositories")?;

    print_batch(&requests, &batch);

    Ok(())
}

/// Collect requests from a JSON file followed by names given on the command line
fn build_requests(names: Vec<String>, file: Option<&str>) -> Result<Vec<CreationRequest>> {
    let mut requests = match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read requests file: {}", path))?;
            serde_json::from_str::<Vec<CreationRequest>>(&content)
                .with_context(|| format!("Failed to parse requests file: {}", path))?
        }
        None => Vec::new(),
    };

    requests.extend(names.into_iter().map(CreationRequest::new));
    Ok(requests)
}

fn print_repo(repo: &RepoDescriptor) {
    println!("  ID:    {}", repo.id.to_string().cyan());
    println!("  Name:  {}", repo.name.bold());
    println!("  Owner: {}", repo.owner.dimmed());
}

fn print_batch(requests: &[CreationRequest], batch: &BatchResult) {
    let header = format!(
        "Batch finished with status {}: {} created, {} failed",
        batch.status,
        batch.succeeded(),
        batch.failed()
    );
    if batch.failed() == 0 {
        println!("{}", header.green().bold());
    } else if batch.succeeded() == 0 {
        println!("{}", header.red().bold());
    } else {
        println!("{}", header.yellow().bold());
    }
    println!();

    for (request, result) in requests.iter().zip(&batch.results) {
        match result {
            CreationResult::Success(repo) => println!(
                "  {} {} {}",
                "✓".green(),
                format!("{}/{}", repo.owner, repo.name).bold(),
                format!("(id {})", repo.id).dimmed()
            ),
            CreationResult::Failure(err) => println!(
                "  {} {} {}",
                "✗".red(),
                display_name(request).bold(),
                format!("{} ({})", err.message, err.status).red()
            ),
        }
    }
}

fn display_name(request: &CreationRequest) -> String {
    if request.name.trim().is_empty() {
        "<empty name>".to_string()
    } else {
        request.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requests_from_names() {
        let requests =
            build_requests(vec!["a".to_string(), "b".to_string()], None).unwrap();
        assert_eq!(requests, vec![CreationRequest::new("a"), CreationRequest::new("b")]);
    }

    #[test]
    fn test_build_requests_from_file_then_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.json");
        std::fs::write(&path, r#"[{"name":"from-file","description":"d"}]"#).unwrap();

        let requests =
            build_requests(vec!["extra".to_string()], Some(path.to_str().unwrap())).unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].description.as_deref(), Some("d"));
        assert_eq!(requests[1].name, "extra");
    }

    #[test]
    fn test_build_requests_missing_file() {
        assert!(build_requests(Vec::new(), Some("/nonexistent/requests.json")).is_err());
    }

    #[test]
    fn test_display_name_for_blank() {
        assert_eq!(display_name(&CreationRequest::new("  ")), "<empty name>");
        assert_eq!(display_name(&CreationRequest::new("x")), "x");
    }
}
