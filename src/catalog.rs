use crate::models::AspectRatio;

/// Shared suffix appended to every prompt so the whole set renders in the
/// same isometric flat-color style.
pub const STYLE_GUIDE: &str = "\nStyle requirements:\n\
- Isometric 3D perspective (30-degree angle)\n\
- Flat colors with minimal gradients\n\
- Clean, modern, professional aesthetic\n\
- Color palette: warm tan/gold (#D4A055), white, gray, with subtle accent colors\n\
- No text or labels in the image\n\
- Simple geometric shapes\n\
- Soft shadows for depth\n\
- White or light gray background\n\
- Professional industrial/tech aesthetic\n";

/// One illustration job: the output filename stem, the subject text, and the
/// aspect ratio to request. `chain_previous` marks frames that should be
/// rendered with the preceding frame as a style reference.
#[derive(Debug, Clone, Copy)]
pub struct PromptRecord {
    pub name: &'static str,
    pub subject: &'static str,
    pub aspect_ratio: AspectRatio,
    pub chain_previous: bool,
}

impl PromptRecord {
    /// Full prompt text sent to the API: subject plus the style guide.
    pub fn prompt(&self) -> String {
        format!("{} {}", self.subject, STYLE_GUIDE)
    }
}

const fn record(
    name: &'static str,
    subject: &'static str,
    aspect_ratio: AspectRatio,
) -> PromptRecord {
    PromptRecord {
        name,
        subject,
        aspect_ratio,
        chain_previous: false,
    }
}

const fn chained(
    name: &'static str,
    subject: &'static str,
    aspect_ratio: AspectRatio,
) -> PromptRecord {
    PromptRecord {
        name,
        subject,
        aspect_ratio,
        chain_previous: true,
    }
}

static CATALOG: &[PromptRecord] = &[
    // Hero background for the landing page.
    record(
        "hero-bg",
        "A wide, abstract illustration representing waste-to-energy transformation for a \
         company website hero section. On the left, stylized geometric waste shapes; in the \
         center, a transformation process shown as energy flow and light rays; on the right, \
         clean energy powering subtle data center and power symbols. Warm amber tones, \
         flowing left-to-right composition, minimal detail, suitable as a background image.",
        AspectRatio::Widescreen,
    ),
    // Facility and pipeline illustrations.
    record(
        "modular-plant-1",
        "An isometric view of a modular industrial waste processing facility with multiple \
         smokestacks, conveyor systems, and a main processing building. The design is modern \
         with flat tan/brown roofing and industrial gray equipment. Clean lines and \
         professional aesthetic.",
        AspectRatio::Standard,
    ),
    record(
        "modular-plant-2",
        "An isometric view of a modular gasification unit with large cylindrical pressure \
         vessels in pink/salmon color, metal piping, and supporting steel structure. \
         Industrial equipment module for a waste-to-energy plant.",
        AspectRatio::Standard,
    ),
    record(
        "modular-plant-3",
        "An isometric view of an industrial gas processing module with multiple spherical \
         tanks, a tall cylindrical column, and metal framework. The tanks are in muted \
         pink/beige colors with industrial gray piping.",
        AspectRatio::Standard,
    ),
    record(
        "pipeline-milwaukee",
        "An aerial isometric view of a modern waste-to-energy facility campus with multiple \
         buildings, large cylindrical storage tanks, green landscaping, and a parking area. \
         Set in a green countryside. Professional industrial facility.",
        AspectRatio::Standard,
    ),
    record(
        "pipeline-virginia",
        "An aerial isometric view of a medium-scale waste processing plant with large \
         dome-shaped biogas digesters, modern industrial buildings, and solar panels on the \
         roof. Clean facility design.",
        AspectRatio::Standard,
    ),
    record(
        "pipeline-louisiana",
        "An aerial isometric view of a large industrial petrochemical integration facility \
         with tall processing towers, multiple storage tanks, and steel framework structures. \
         Modern waste-to-energy plant.",
        AspectRatio::Standard,
    ),
    // Product illustrations.
    record(
        "product-jet-fuel",
        "An isometric view of a metal fuel barrel/drum for jet fuel with a diamond hazard \
         warning label. Industrial steel container with silver metallic finish. Simple clean \
         design.",
        AspectRatio::Square,
    ),
    record(
        "product-ethanol",
        "An isometric view of a glass laboratory bottle containing clear liquid ethanol with \
         a black cap. The bottle has a simple label. Clean laboratory/scientific aesthetic.",
        AspectRatio::Square,
    ),
    record(
        "product-meg",
        "An isometric view of a blue industrial chemical barrel/drum for storing \
         monoethylene glycol. Large 55-gallon drum with blue finish. Industrial container \
         design.",
        AspectRatio::Square,
    ),
    record(
        "product-pet",
        "An isometric view of colorful PET plastic bottles - one red, one green, one orange, \
         and a white container. Representing polyethylene terephthalate products. Consumer \
         plastic bottles.",
        AspectRatio::Square,
    ),
    // Process-step flipbook for the science section. Each frame after the
    // first chains to its predecessor for visual continuity.
    record(
        "process-step-1",
        "An isometric illustration of waste reception at an industrial facility. A garbage \
         truck dumps mixed waste into a large tan/gold reception hopper with a visible \
         hydraulic press compressing waste into dense rectangular plugs. Clean industrial \
         setting with a concrete floor.",
        AspectRatio::Square,
    ),
    chained(
        "process-step-2",
        "An isometric illustration of a pyrolysis chamber. A horizontal cylindrical chamber \
         in dark gray with tan/gold accents, compressed waste plugs moving through it, wavy \
         heat lines on the walls and steam rising into pipes above. No flames, only radiant \
         heat.",
        AspectRatio::Square,
    ),
    chained(
        "process-step-3",
        "An isometric illustration of a high-temperature gasification reactor. A large \
         vertical cylindrical vessel in dark gray with a glowing orange core visible through \
         a window, blue oxygen injection pipes feeding in, molten material at the bottom and \
         synthesis gas pipes exiting the top.",
        AspectRatio::Square,
    ),
    chained(
        "process-step-4",
        "An isometric illustration of a shock quench cooling system. Molten material falls \
         glowing into a tan/gold water quench tank, steam clouds rise, and a conveyor belt \
         carries cooled dark gray vitrified slag out while metal pellets are separated on a \
         secondary conveyor.",
        AspectRatio::Square,
    ),
    chained(
        "process-step-5",
        "An isometric illustration of a gas cleaning and water treatment system. Cylindrical \
         scrubber towers in tan/gold connected by gas pipes, a water treatment basin with \
         clean blue water, small containers collecting sulfur, zinc concentrate, and salts, \
         and a clean synthesis gas pipe exiting to the right.",
        AspectRatio::Square,
    ),
    chained(
        "process-step-6",
        "An isometric illustration of syngas energy conversion outputs. A clean synthesis \
         gas pipe enters from the left into a gas turbine generator producing electricity, \
         with output pipes branching to fuel containers and storage tanks, green energy \
         accents, and a power transmission tower in the background.",
        AspectRatio::Square,
    ),
];

/// The full ordered catalog.
pub fn records() -> &'static [PromptRecord] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn record_names_are_pairwise_distinct() {
        let mut seen = HashSet::new();
        for record in records() {
            assert!(
                seen.insert(record.name),
                "duplicate catalog name: {}",
                record.name
            );
        }
    }

    #[test]
    fn every_prompt_carries_the_style_guide() {
        for record in records() {
            let prompt = record.prompt();
            assert!(prompt.starts_with(record.subject));
            assert!(
                prompt.contains("Isometric 3D perspective"),
                "{} is missing the style guide",
                record.name
            );
        }
    }

    #[test]
    fn the_first_record_never_chains() {
        assert!(!records()[0].chain_previous);
        assert!(!records().iter().any(|r| r.name == "process-step-1" && r.chain_previous));
    }

    #[test]
    fn hero_is_widescreen() {
        let hero = records().iter().find(|r| r.name == "hero-bg").unwrap();
        assert_eq!(hero.aspect_ratio, AspectRatio::Widescreen);
    }
}
