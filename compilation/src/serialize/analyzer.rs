//! Analyzer / generator identity serializer.
//!
//! Only `{fullName, assemblyName}` is written. The assembly path is left out,
//! so two same-named analyzers from different locations are indistinguishable
//! in the key. Acceptable for an emit-focused fingerprint.

use detkey_kernel::canon::writer::CanonicalWriter;

use crate::model::analyzer::AnalyzerIdentity;

/// `{fullName, assemblyName}`.
pub fn write_analyzer(w: &mut CanonicalWriter, analyzer: &AnalyzerIdentity) {
    w.write_object_start();
    w.write_str("fullName", &analyzer.full_name);
    w.write_str("assemblyName", &analyzer.assembly_name);
    w.write_object_end();
}
