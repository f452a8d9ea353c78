//! The sample object graph served by the demo.

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use peephole_core::{
    impl_inspect_struct, next_path, subpath, summary, Funcmap, Guarded, Inspect, Inspector,
    RenderError, RequestContext, Summarizer, Template,
};
use tracing::warn;

/// Number of recent tick values kept in [`Counters::recent`].
const RECENT_TICKS: usize = 8;

const FOO_TEMPLATE: &str = r"
<div>
<p>struct Foo ({{ .quux }}) {</p>
<p>&nbsp;jar i64 : {{ jar }}</p>
<p>&nbsp;baz i64 : {{ baz }}</p>
<p>&nbsp;quux String : {{ quux }}</p>
<p>&nbsp;ints Vec&lt;i64&gt; : {{ ints }}</p>
<p>&nbsp;things [thing] : {{ things }}</p>
<p>&nbsp;bar Option&lt;Bar&gt; : {{ bar }}</p>
<p>&nbsp;toot Option&lt;thing&gt; : {{ toot }}</p>
<p>&nbsp;counters Guarded&lt;Counters&gt; : {{ counters }}</p>
<p>}</p>
</div>
";

/// Anything that can sit in a heterogeneous slot of the graph.
pub type Thing = Box<dyn Inspect + Send + Sync>;

/// The root of the demo graph. Renders its own top-level view.
#[derive(Default)]
pub struct Foo {
    pub jar: i64,
    pub baz: i64,
    /// Shown in the heading of the custom view.
    pub quux: String,
    pub bar: Option<Box<Bar>>,
    pub ints: Vec<i64>,
    /// Mixed values: another `Foo`, a `Doot`, and plain integers.
    pub things: Vec<Thing>,
    pub toot: Option<Thing>,
    /// Bumped by [`run_ticker`].
    pub counters: Guarded<Counters>,
}

impl_inspect_struct!(
    Foo { jar, baz, quux, bar, ints, things, toot, counters },
    with: [inspector]
);

impl Inspector for Foo {
    fn render(
        &self,
        prefix: &str,
        path: &[&str],
        ctx: &RequestContext,
        out: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        if !path.is_empty() {
            return next_path(self, prefix, path, ctx, out);
        }

        let jar_link = subpath(prefix, "jar");
        let baz_link = subpath(prefix, "baz");
        let quux_link = subpath(prefix, "quux");
        let ints_link = subpath(prefix, "ints");
        let bar_link = subpath(prefix, "bar");
        let toot_link = subpath(prefix, "toot");
        let counters_link = subpath(prefix, "counters");
        let things_link = subpath(prefix, "things");
        let thing_count = self.things.len();

        let funcs = Funcmap::new()
            .with("jar", summary(&self.jar, &jar_link, ctx))
            .with("baz", summary(&self.baz, &baz_link, ctx))
            .with("quux", summary(&self.quux, &quux_link, ctx))
            .with("ints", summary(&self.ints, &ints_link, ctx))
            .with("bar", summary(&self.bar, &bar_link, ctx))
            .with("toot", summary(&self.toot, &toot_link, ctx))
            .with("counters", summary(&self.counters, &counters_link, ctx))
            .with_fn("things", move |out| {
                write!(
                    out,
                    r#"<a href="{things_link}">[Just a bunch of things ({thing_count} items)]</a>"#
                )?;
                Ok(())
            });

        Template::parse(FOO_TEMPLATE).generate(out, self, &funcs)
    }
}

/// A plain struct with its own summary.
#[derive(Debug, Default)]
pub struct Bar {
    pub baz: i64,
    pub boo: String,
}

impl_inspect_struct!(Bar { baz, boo }, with: [summarizer]);

impl Summarizer for Bar {
    fn summary(
        &self,
        prefix: &str,
        _ctx: &RequestContext,
        out: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        write!(
            out,
            r#"<a href="{prefix}">[Hello, I'm a Bar and this is my custom summary!]</a>"#
        )?;
        Ok(())
    }
}

/// A plain struct rendered entirely by the default views.
#[derive(Debug, Default)]
pub struct Doot {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl_inspect_struct!(Doot { x, y, z });

/// Live state updated by [`run_ticker`] while the graph is being browsed.
#[derive(Debug, Default)]
pub struct Counters {
    pub ticks: u64,
    pub recent: VecDeque<u64>,
}

impl_inspect_struct!(Counters { ticks, recent });

impl Counters {
    /// Count one tick, keeping the last few tick numbers.
    pub fn record(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
        self.recent.push_back(self.ticks);
        while self.recent.len() > RECENT_TICKS {
            self.recent.pop_front();
        }
    }
}

/// The graph served by the demo.
pub fn sample() -> Foo {
    Foo {
        quux: String::from("the demo root"),
        bar: Some(Box::default()),
        ints: vec![1, 2, 3, 4, 5, 6, 7],
        things: vec![
            Box::new(Foo::default()),
            Box::new(Doot::default()),
            Box::new(1_i64),
            Box::new(2_i64),
            Box::new(3_i64),
        ],
        toot: Some(Box::new(Doot { x: 1, y: 2, z: 3 })),
        ..Foo::default()
    }
}

/// Record a tick on `root`'s counters every `interval` until the lock is
/// poisoned or the task is aborted.
pub async fn run_ticker(root: Arc<Foo>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        let Ok(mut counters) = root.counters.write() else {
            warn!("counters lock poisoned, stopping ticker");
            return;
        };
        counters.record();
    }
}
