#[cfg(test)]
mod tests {
    use crate::decor::{InputDecorator, OutputDecorator};
    use crate::{ObjectCodec, TokenStreamFactory, TreeCodec};
    use std::sync::Arc;

    struct Noop;
    impl InputDecorator for Noop {}
    impl OutputDecorator for Noop {}

    #[test]
    fn copy_carries_codec_and_both_decorators() {
        let codec: Arc<dyn ObjectCodec> = Arc::new(TreeCodec::new());
        let input: Arc<dyn InputDecorator> = Arc::new(Noop);
        let output: Arc<dyn OutputDecorator> = Arc::new(Noop);

        let mut f = TokenStreamFactory::default();
        f.set_codec(Some(codec.clone()))
            .set_input_decorator(Some(input.clone()))
            .set_output_decorator(Some(output.clone()));

        let copy = f.copy();
        assert!(Arc::ptr_eq(&copy.codec().unwrap(), &codec));
        assert!(Arc::ptr_eq(&copy.input_decorator().unwrap(), &input));
        assert!(Arc::ptr_eq(&copy.output_decorator().unwrap(), &output));
    }

    #[test]
    fn copies_are_independent_afterwards() {
        let mut f = TokenStreamFactory::default();
        f.set_input_decorator(Some(Arc::new(Noop)));

        let copy = f.copy();
        f.set_input_decorator(None);

        assert!(f.input_decorator().is_none());
        assert!(copy.input_decorator().is_some());
    }
}
