//! Command execution against a studio.

use super::Commands;
use crate::CreativeStudio;
use anyhow::{Context, bail};
use atelier_core::{GeneratedAsset, GenerationKind, SourceImage};
use atelier_interface::{CredentialProvider, GenerativeProvider};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Runs one command, printing progress to stderr.
///
/// Ctrl-C tears the studio down, which abandons a polling video job.
pub async fn run_command<P, C>(studio: CreativeStudio<P, C>, command: Commands) -> anyhow::Result<()>
where
    P: GenerativeProvider,
    C: CredentialProvider,
{
    let studio = studio
        .with_reporter(|kind: GenerationKind, status: &str| eprintln!("[{}] {}", kind, status));

    let teardown = studio.teardown_token();
    tokio::spawn({
        let teardown = teardown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted");
                teardown.cancel();
            }
        }
    });

    tokio::select! {
        biased;
        result = execute(&studio, command) => result,
        _ = teardown.cancelled() => bail!("Interrupted"),
    }
}

async fn execute<P, C>(studio: &CreativeStudio<P, C>, command: Commands) -> anyhow::Result<()>
where
    P: GenerativeProvider,
    C: CredentialProvider,
{
    match command {
        Commands::Recommend { occasion, json } => {
            let Some(recommendation) = studio.recommend(&occasion).await? else {
                eprintln!("Describe the occasion to get a recommendation.");
                return Ok(());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&recommendation)?);
            } else {
                println!("{}\n\n{}", recommendation.name(), recommendation.reason());
            }
        }
        Commands::Image {
            prompt,
            tier,
            output,
        } => {
            let asset = studio.generate_image(&prompt, tier).await?;
            write_asset(&asset, &output).await?;
        }
        Commands::Animate {
            image,
            aspect_ratio,
            output,
        } => {
            let source = load_source_image(&image).await?;
            let asset = studio.animate_image(source, aspect_ratio).await?;
            write_asset(&asset, &output).await?;
        }
        Commands::Config => {
            println!("{}", studio.config().to_toml()?);
        }
    }
    Ok(())
}

#[instrument(skip(asset), fields(kind = %asset.kind(), path = %path.display()))]
async fn write_asset(asset: &GeneratedAsset, path: &Path) -> anyhow::Result<()> {
    tokio::fs::write(path, asset.payload().data())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(bytes = asset.payload().data().len(), "Asset written");
    println!("{}", path.display());
    Ok(())
}

/// Reads an image file, inferring its type from the extension.
pub async fn load_source_image(path: &Path) -> anyhow::Result<SourceImage> {
    let Some(mime) = image_mime(path) else {
        bail!("Unsupported image type: {}", path.display());
    };
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(SourceImage::new(mime, data)?)
}

/// MIME type for a supported image extension.
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_mime_from_extension() {
        assert_eq!(image_mime(Path::new("cake.PNG")), Some("image/png"));
        assert_eq!(image_mime(Path::new("a/b/cake.jpeg")), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("cake.webp")), Some("image/webp"));
        assert_eq!(image_mime(Path::new("cake.mp4")), None);
        assert_eq!(image_mime(Path::new("cake")), None);
    }

    #[tokio::test]
    async fn test_load_source_image_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        assert!(load_source_image(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_load_source_image_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cake.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

        let image = load_source_image(&path).await.unwrap();
        assert_eq!(image.mime(), "image/jpeg");
        assert_eq!(image.data(), &[0xFF, 0xD8, 0xFF]);
    }
}
