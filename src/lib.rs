//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# scopelog

scopelog is a minimal structured-logging front end with per-flow scope
chains.

# The problem

Structured-logging APIs make it easy to attach state to a single log call,
but the context that actually explains an entry (which request, which job,
which retry attempt) usually spans *many* calls. Threading that context
through every call site by hand doesn't scale, and stuffing it into a global
corrupts it the moment two flows run at once.

scopelog's answer is the logging scope: a nested context value you enter
once and that rides along with every record logged on that flow until you
leave it. The hard parts live here:

* scope chains propagate across threads and async call trees without
  cross-talk between unrelated flows;
* scope handles may be released out of nesting order (concurrent disposal
  paths do this) without panics or corrupted stacks;
* scope tracking is lazily enabled: turning it on or off costs nothing until
  the first log call or scope begin, at which point the decision freezes;
* writers read the chain as an ordered, innermost-first sequence, paying
  only for the prefix they look at.

Everything else belongs to the [`Writer`] you plug in: formatting,
transport, persistence, fan-out, filtering by category.

# The API

```rust
use std::sync::Arc;
use scopelog::{EventId, InMemoryWriter, Level, Logger};

let writer = Arc::new(InMemoryWriter::new());
let logger = Logger::new(writer.clone());

let _session = logger.begin_scope("session abc");
{
    let _request = logger.begin_scope("request 42");
    logger
        .log(Level::Warning, EventId::new(7, "slow_query"), 1300u64, None, |ms, _| {
            format!("query took {}ms", ms)
        })
        .unwrap();
}

let records = writer.drain_records();
let scopes: Vec<String> = records[0].scopes().map(|s| s.to_string()).collect();
assert_eq!(scopes, ["request 42", "session abc"]);
```

Messages are deferred: the closure you pass runs only if a writer asks for
the text, and at most once. A log call below the minimum level returns
before allocating anything.

# Multithreading

Scope chains are stored per logical execution flow, not globally. Frames are
immutable and cheap to share; the only mutable piece is each flow's chain
head. Concurrent flows sharing one [`Logger`] each see exactly their own
scopes. To carry the chain into a spawned thread, snapshot
[`scope::current::head`] and install it in the child; to carry it into a
spawned or offloaded future, wrap it in [`scope::ApplyScopes`].

# Errors

Configuration values parsed from strings or raw numbers can fail with
[`ConfigError`]. A failing writer's error returns from [`Logger::log`]
unmodified; the core never swallows, wraps, or retries a writer failure, and
it has no fallback writer.
*/

mod error;
mod gate;
mod level;
mod log_record;
mod logger;
mod memory_writer;
pub mod scope;
mod state;
mod stderr_writer;
mod writer;

pub use error::{ConfigError, WriteError};
pub use gate::LogGate;
pub use level::Level;
pub use log_record::{EventId, LogRecord};
pub use logger::{Logger, ScopeHandle};
pub use memory_writer::InMemoryWriter;
pub use state::{State, StateValue};
pub use stderr_writer::StdErrWriter;
pub use writer::Writer;
