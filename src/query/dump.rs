//! Test-only dump methods for query inspection.

use super::Query;

impl Query<'_> {
    pub fn dump_cst(&self) -> String {
        self.printer().dump()
    }

    pub fn dump_cst_full(&self) -> String {
        self.printer().with_trivia(true).dump()
    }

    pub fn dump_diagnostics(&self) -> String {
        self.diagnostics().render(self.source)
    }

    pub fn dump_diagnostics_raw(&self) -> String {
        self.diagnostics().printer().raw().source(self.source).render()
    }
}
