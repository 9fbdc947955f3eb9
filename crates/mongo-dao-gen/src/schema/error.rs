/// Collects attribute errors so a single compile run reports all of them.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    pub(crate) fn extend(&mut self, result: syn::Result<()>) {
        if let Err(err) = result {
            self.push(err);
        }
    }

    pub(crate) fn into_result(self) -> syn::Result<()> {
        match self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        }) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
