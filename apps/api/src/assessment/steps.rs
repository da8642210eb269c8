use serde::Serialize;

/// The wizard steps in their fixed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Passions,
    Skills,
    WorkStyle,
}

/// Copy shown for a step. Presentation text, kept next to the gate it belongs to.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StepCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Passions, Step::Skills, Step::WorkStyle];

    /// 1-based position, as shown in the progress bar.
    pub fn number(self) -> u8 {
        match self {
            Step::Passions => 1,
            Step::Skills => 2,
            Step::WorkStyle => 3,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Passions => Some(Step::Skills),
            Step::Skills => Some(Step::WorkStyle),
            Step::WorkStyle => None,
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// The answer must be strictly longer than this many characters.
    pub fn min_length_exclusive(self) -> usize {
        match self {
            Step::Passions => 10,
            Step::Skills => 5,
            Step::WorkStyle => 3,
        }
    }

    /// Profile field this step fills, in wire spelling.
    pub fn field(self) -> &'static str {
        match self {
            Step::Passions => "passions",
            Step::Skills => "skills",
            Step::WorkStyle => "preferredWorkStyle",
        }
    }

    pub fn button_label(self) -> &'static str {
        if self.is_last() {
            "Analizar Perfil"
        } else {
            "Siguiente"
        }
    }

    pub fn copy(self) -> StepCopy {
        match self {
            Step::Passions => StepCopy {
                title: "¿Qué te apasiona?",
                description: "Describe tus hobbies, temas de interés, o actividades donde pierdes la noción del tiempo. Sé detallado.",
                placeholder: "Me encanta resolver problemas lógicos, leer sobre tecnología, ayudar a las personas a entender conceptos difíciles, jugar videojuegos de estrategia...",
            },
            Step::Skills => StepCopy {
                title: "Tus Habilidades Actuales",
                description: "¿En qué eres bueno naturalmente? ¿Qué materias se te facilitaban en la escuela? ¿Qué habilidades técnicas o blandas tienes?",
                placeholder: "Soy bueno con los números, tengo facilidad de palabra, sé un poco de programación, soy muy organizado...",
            },
            Step::WorkStyle => StepCopy {
                title: "Estilo de Vida Preferido",
                description: "¿Prefieres trabajar remoto, en oficina, o en campo? ¿Te gusta trabajar solo o en equipo? ¿Buscas estabilidad o riesgo?",
                placeholder: "Prefiero el trabajo remoto, me gusta colaborar pero necesito tiempo para concentrarme solo, busco un equilibrio entre vida personal y trabajo...",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order_is_fixed() {
        assert_eq!(Step::default(), Step::Passions);
        assert_eq!(Step::Passions.next(), Some(Step::Skills));
        assert_eq!(Step::Skills.next(), Some(Step::WorkStyle));
        assert_eq!(Step::WorkStyle.next(), None);
        let numbers: Vec<u8> = Step::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(Step::Passions.min_length_exclusive(), 10);
        assert_eq!(Step::Skills.min_length_exclusive(), 5);
        assert_eq!(Step::WorkStyle.min_length_exclusive(), 3);
    }

    #[test]
    fn test_only_last_step_submits() {
        assert_eq!(Step::Passions.button_label(), "Siguiente");
        assert_eq!(Step::Skills.button_label(), "Siguiente");
        assert_eq!(Step::WorkStyle.button_label(), "Analizar Perfil");
    }

    #[test]
    fn test_step_serializes_snake_case() {
        assert_eq!(serde_json::to_value(Step::WorkStyle).unwrap(), "work_style");
    }
}
