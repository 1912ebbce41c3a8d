use anyhow::Context;
use study_api::UploadDocument;
use study_core::entities::UploadResult;
use study_views::{Route, UploadFlow};

use crate::cli::root_commands::UploadArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::gate;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Activity;

/// Handle `sbd upload <workspace-id> <file.pdf>`.
pub async fn handle(args: &UploadArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = gate::enter(ctx, &format!("/upload/{}", args.workspace_id)).await?;
    let Route::Upload(workspace) = route else {
        anyhow::bail!("unexpected view '{route}' for upload");
    };

    let document = UploadDocument::from_path(&args.file)
        .await
        .with_context(|| format!("cannot upload '{}'", args.file.display()))?;

    let flow = UploadFlow::new(&ctx.session, workspace);
    let activity = Activity::waiting(&format!("processing {}", document.filename()));
    let submitted = flow.submit(Some(document)).await;

    let result = match submitted {
        Ok(Some(result)) => {
            activity.done();
            result
        }
        Ok(None) => {
            activity.done();
            return Ok(());
        }
        Err(error) => {
            activity.failed("upload failed");
            return Err(error.into());
        }
    };

    match flags.format {
        OutputFormat::Table => {
            print_result(&result);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&result, flags.format),
    }
}

fn print_result(result: &UploadResult) {
    println!("{}", result.filename);
    println!();
    println!("Summary");
    println!("{}", result.summary);

    if !result.study_plan.is_empty() {
        println!();
        println!("Study plan");
        for (stage, description) in result.study_plan.iter() {
            println!("  {stage}: {description}");
        }
    }

    if !result.videos.is_empty() {
        println!();
        println!("Videos");
        for video in &result.videos {
            println!("  {} <{}>", video.title, video.url);
        }
    }
}
