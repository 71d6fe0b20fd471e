//! Instance JSON files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::{Instance, InstanceRecord, ModelResult};

/// Load and validate an instance from a JSON file.
pub fn load_instance_json(path: &Path) -> ModelResult<Instance> {
    let file = File::open(path)?;
    load_instance_reader(BufReader::new(file))
}

/// Like [`load_instance_json`] but accepts any `Read` source.
pub fn load_instance_reader<R: Read>(reader: R) -> ModelResult<Instance> {
    let record: InstanceRecord = serde_json::from_reader(reader)?;
    Instance::try_from(record)
}

/// Write `instance` as pretty-printed JSON.
pub fn save_instance_json(path: &Path, instance: &Instance) -> ModelResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, &InstanceRecord::from(instance))?;
    out.flush()?;
    Ok(())
}
