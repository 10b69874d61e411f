use crate::Command;
use app_state::AppSettings;
use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use common_types::{ALL_CATEGORIES, EXPORT_FILE_NAME, ImageRecord, KNOWN_CATEGORIES};
use gallery_client::media::{HostedMediaClient, MediaFile};
use gallery_client::remote::HttpGalleryClient;
use gallery_client::{
    DeleteReport, GalleryController, LoadSource, RecordChanges, RecordDraft, UploadPolicy,
};
use reqwest::Client;
use std::path::PathBuf;
use tracing::warn;

type Controller = GalleryController<HttpGalleryClient, HostedMediaClient>;

fn controller(settings: &AppSettings) -> Result<Controller> {
    let http_client = Client::new();
    let remote = HttpGalleryClient::from_settings(http_client.clone(), &settings.client)?;
    let media = HostedMediaClient::from_settings(http_client, &settings.media);
    Ok(GalleryController::new(
        remote,
        media,
        UploadPolicy::from(&settings.media),
    ))
}

/// Loads the gallery, refusing to go on with the sample set for anything that writes.
async fn load_for_write(controller: &mut Controller) -> Result<()> {
    match controller.load().await {
        LoadSource::Remote => Ok(()),
        LoadSource::Sample { reason } => Err(eyre!("Gallery service unreachable: {reason}")),
    }
}

pub async fn run(command: Command, settings: &AppSettings) -> Result<()> {
    let mut controller = controller(settings)?;

    match command {
        Command::List { search, category } => {
            if let LoadSource::Sample { reason } = controller.load().await {
                warn!("Showing sample images, gallery service unreachable: {}", reason);
            }
            let state = controller.state_mut();
            if let Some(search) = search {
                state.set_search(&search);
            }
            if let Some(category) = category {
                warn_unknown_category(&category);
                state.set_category(&category);
            }
            let view = controller.state().filtered_view();
            for record in &view {
                print_record(record);
            }
            let document = controller.state().document();
            println!("{} of {} records", view.len(), document.len());
            if document.unreadable_count() > 0 {
                println!(
                    "{} unreadable entries are kept as-is",
                    document.unreadable_count()
                );
            }
        }
        Command::Export { output } => {
            load_for_write(&mut controller).await?;
            let output = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            controller.export_to(&output).await?;
            println!("Exported {} records to {}", controller.state().document().len(), output.display());
        }
        Command::Upload {
            file,
            name,
            category,
            tags,
            description,
        } => {
            warn_unknown_category(&category);
            load_for_write(&mut controller).await?;
            let file = MediaFile::from_path(&file).await?;
            let draft = RecordDraft {
                name: name.unwrap_or_else(|| file.suggested_name()),
                tags,
                category,
                description,
            };
            let record = controller.create(draft, Some(&file)).await?;
            println!("Created:");
            print_record(&record);
        }
        Command::Edit {
            id,
            name,
            tags,
            category,
            description,
            image,
        } => {
            if let Some(category) = &category {
                warn_unknown_category(category);
            }
            load_for_write(&mut controller).await?;
            let replacement = match image {
                Some(path) => Some(MediaFile::from_path(&path).await?),
                None => None,
            };
            let changes = RecordChanges {
                name,
                tags,
                category,
                description,
            };
            let record = controller.edit(id, changes, replacement.as_ref()).await?;
            println!("Updated:");
            print_record(&record);
        }
        Command::Delete { ids } => {
            load_for_write(&mut controller).await?;
            let report = controller.delete_ids(&ids).await?;
            print_delete_report(&report);
        }
        Command::DeleteAll { yes } => {
            if !yes {
                bail!("Refusing to delete every record without --yes");
            }
            load_for_write(&mut controller).await?;
            let report = controller.delete_all().await?;
            print_delete_report(&report);
        }
        Command::Reset { yes } => {
            if !yes {
                bail!("Refusing to replace the gallery with sample images without --yes");
            }
            controller.reset().await?;
            println!("Gallery reset to {} sample records", controller.state().document().len());
        }
    }

    Ok(())
}

fn is_listed_category(category: &str) -> bool {
    category == ALL_CATEGORIES || KNOWN_CATEGORIES.contains(&category)
}

/// Other categories are allowed, this only catches typos.
fn warn_unknown_category(category: &str) {
    if !is_listed_category(category) {
        warn!(
            "Category '{}' is not one of {}",
            category,
            KNOWN_CATEGORIES.join(", ")
        );
    }
}

fn print_record(record: &ImageRecord) {
    println!(
        "{:>15}  {:<14} {}  [{}]",
        record.id, record.category, record.name, record.tags
    );
    println!("{:>15}  {}", "", record.url);
}

fn print_delete_report(report: &DeleteReport) {
    println!("Deleted {} records", report.removed.len());
    for orphan in &report.orphaned {
        println!(
            "Orphaned image {} of record {} ({}): {}",
            orphan.public_id,
            orphan.record_id,
            orphan.recorded_at.to_rfc3339(),
            orphan.reason
        );
    }
}
