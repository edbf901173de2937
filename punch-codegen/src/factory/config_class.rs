//! Config class assembly.

use punchcard_core::{Error, ParameterAndType};

use super::{
    PropertyFactory, SetterMethodFactory, ToArrayMethodFactory, separator::separate_by_blank,
};
use crate::{
    builder::{ClassSpec, Member, MethodSpec, Statement, Value},
    naming::derive_class_name,
};

/// Name of the generated static factory method.
pub const CREATE_METHOD: &str = "create";

/// Assembles a config class from a parameter list and a file name.
///
/// The class body is always `[properties][create()][setters][toArray()]`,
/// with one blank marker between adjacent members.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigClassFactory {
    property_factory: PropertyFactory,
    setter_method_factory: SetterMethodFactory,
    to_array_method_factory: ToArrayMethodFactory,
}

impl ConfigClassFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the class descriptor.
    ///
    /// Every parameter is validated and the class name derived before any
    /// member is synthesized, so an error never leaves a partial class.
    pub fn create_class_from_parameter_names(
        &self,
        parameters: &[ParameterAndType],
        file_name: &str,
    ) -> Result<ClassSpec, Error> {
        for (index, parameter) in parameters.iter().enumerate() {
            parameter
                .validate()
                .map_err(|source| Error::validation(index, source))?;
        }

        let class_name = derive_class_name(file_name)?;

        let properties = self
            .property_factory
            .create_properties(parameters)
            .into_iter()
            .map(Member::from);
        let setters = parameters
            .iter()
            .map(|parameter| Member::from(self.setter_method_factory.create(parameter)));
        let to_array = self.to_array_method_factory.create(parameters);

        let members: Vec<Member> = properties
            .chain(std::iter::once(Self::create_static_method().into()))
            .chain(setters)
            .chain(std::iter::once(to_array.into()))
            .collect();

        Ok(ClassSpec::new(class_name)
            .final_()
            .members(separate_by_blank(members)))
    }

    fn create_static_method() -> MethodSpec {
        MethodSpec::new(CREATE_METHOD)
            .static_()
            .statement(Statement::return_(Value::new_instance("self")))
    }
}
