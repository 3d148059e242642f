/// Declares a CallManager entity backed by a [`Model`](axl_model::Model).
///
/// The struct name is the schema type name.
macro_rules! define_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(axl_model::Model);

        impl axl_model::Entity for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn from_model(model: axl_model::Model) -> Self {
                Self(model)
            }

            fn model(&self) -> &axl_model::Model {
                &self.0
            }

            fn model_mut(&mut self) -> &mut axl_model::Model {
                &mut self.0
            }

            fn into_model(self) -> axl_model::Model {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = axl_model::Model;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}
