use rayon::prelude::*;

use crate::{
    encode::png::encode,
    foundation::error::{FormiconError, FormiconResult},
    synth::style::IconStyle,
    synth::synthesizer::synthesize_with_style,
};

/// One icon to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconRequest {
    /// Edge length in pixels.
    pub size: i64,
    /// Emit RGBA instead of RGB.
    pub has_alpha: bool,
}

/// An encoded icon and the request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedIcon {
    /// Originating request.
    pub request: IconRequest,
    /// Complete PNG file bytes.
    pub png: Vec<u8>,
}

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-icon rendering.
pub struct RenderThreading {
    /// Render icons in parallel when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Icons produced.
    pub icons_total: u64,
    /// Sum of encoded file sizes in bytes.
    pub bytes_total: u64,
}

/// Synthesize and encode a single icon.
pub fn render_icon(request: IconRequest, style: &IconStyle) -> FormiconResult<RenderedIcon> {
    let raster = synthesize_with_style(request.size, request.has_alpha, style)?;
    let png = encode(&raster, raster.width(), raster.height())?;
    Ok(RenderedIcon { request, png })
}

/// Render every request; output order matches `requests`.
///
/// Each icon is independent, so the parallel path produces byte-identical results to the
/// sequential one. The first failing request aborts the batch.
#[tracing::instrument(skip(style, threading), fields(count = requests.len()))]
pub fn render_icons(
    requests: &[IconRequest],
    style: &IconStyle,
    threading: &RenderThreading,
) -> FormiconResult<(Vec<RenderedIcon>, RenderStats)> {
    if requests.is_empty() {
        return Err(FormiconError::validation("no icon sizes requested"));
    }

    let icons = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            requests
                .par_iter()
                .map(|&req| render_icon(req, style))
                .collect::<FormiconResult<Vec<_>>>()
        })?
    } else {
        requests
            .iter()
            .map(|&req| render_icon(req, style))
            .collect::<FormiconResult<Vec<_>>>()?
    };

    let stats = RenderStats {
        icons_total: icons.len() as u64,
        bytes_total: icons.iter().map(|i| i.png.len() as u64).sum(),
    };
    tracing::debug!(?stats, "rendered icon batch");
    Ok((icons, stats))
}

fn build_thread_pool(threads: Option<usize>) -> FormiconResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FormiconError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FormiconError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
