//! Fixed multi-word expressions replaced by plain wording.
//!
//! Applies to A1, A2 and B1 targets only. Apostrophes in the table match
//! both the straight (') and typographic (’) forms.

use super::{RewriteContext, RewriteStage};
use crate::level::CefrLevel;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Expression -> plain equivalent, applied in this order.
pub const PHRASAL_SUBSTITUTIONS: &[(&str, &str)] = &[
    // argumentative / academic
    ("il convient de noter que", "il faut dire que"),
    ("il est essentiel de souligner que", "c'est très important de dire que"),
    ("il est impératif de", "il faut vraiment"),
    ("il va de soi que", "c'est évident que"),
    ("il ressort de cette analyse que", "on voit que"),
    ("on observe une tendance à", "on voit souvent que"),
    ("on peut en déduire que", "on peut comprendre que"),
    ("à première vue", "au début"),
    ("en d'autres termes", "pour dire simplement"),
    ("en définitive", "finalement"),
    // relative clauses
    ("qui est bruyant", "bruyant"),
    ("qui est important", "important"),
    ("qui est nécessaire", "nécessaire"),
    ("qui est essentiel", "essentiel"),
    // legal / administrative
    ("l'éloquence de son plaidoyer", "le fait qu'il parle très bien"),
    ("l'eloquence de son plaidoyer", "le fait qu'il parle très bien"),
    ("documentation exhaustive", "beaucoup de documents"),
    ("documentation très exhaustive", "beaucoup de documents"),
    ("dissiper le scepticisme", "enlever les doutes"),
    ("dissiper le scepticisme initial", "enlever les premiers doutes"),
    ("emporter son adhésion", "le convaincre complètement"),
    ("emporter l'adhésion du jury", "convaincre complètement le jury"),
    ("être soumis à une réglementation", "devoir suivre une règle"),
    ("être en conformité avec", "respecter"),
    ("porter atteinte à", "causer un problème"),
    ("être tenu responsable", "être responsable"),
    ("faire l'objet de", "être concerné par"),
    ("entrer en vigueur", "commencer officiellement"),
    // abstract / intellectual
    ("la dichotomie entre", "la différence entre"),
    ("le postulat initial", "l'idée de départ"),
    ("le raisonnement sous-jacent", "l'idée cachée"),
    ("les implications de ce phénomène", "ce que cela change"),
    ("une perspective nuancée", "une idée plus précise"),
    ("les enjeux majeurs", "les choses importantes"),
    ("les facteurs déterminants", "les choses qui changent tout"),
    ("un constat alarmant", "une situation inquiétante"),
    ("une approche holistique", "une vision générale"),
    ("un contexte favorable", "une bonne situation"),
    // emotional / subjective
    ("susciter une vive réaction", "faire réagir fortement"),
    ("nourrir des inquiétudes", "donner des inquiétudes"),
    ("faire preuve de résilience", "être très fort et continuer"),
    ("témoigner d'une grande prudence", "être très prudent"),
    ("se heurter à un refus", "recevoir un refus"),
    ("subir une pression considérable", "avoir beaucoup de pression"),
    ("manifester un intérêt marqué", "être très intéressé"),
    ("faire preuve d'empathie", "comprendre les autres"),
    ("exprimer son désarroi", "dire qu'on est triste ou perdu"),
    ("tirer parti de", "utiliser pour avoir un avantage"),
    // technical / scientific
    ("mettre en évidence", "montrer clairement"),
    ("effectuer une analyse approfondie", "étudier beaucoup"),
    ("formuler une hypothèse", "donner une idée possible"),
    ("procéder à une comparaison", "comparer"),
    ("un échantillon représentatif", "un groupe qui montre bien la situation"),
    ("des données fiables", "des données sûres"),
    ("une corrélation significative", "un lien important"),
    ("une variation notable", "un changement important"),
    ("un résultat probant", "un bon résultat"),
    ("une méthodologie rigoureuse", "une façon de travailler organisée"),
    // social / economic
    ("être confronté à une crise", "avoir un gros problème"),
    ("accroître la productivité", "travailler mieux"),
    ("réduire les disparités", "réduire les différences"),
    ("favoriser l'inclusion", "aider tout le monde à participer"),
    ("renforcer la cohésion sociale", "aider les gens à bien vivre ensemble"),
    ("promouvoir l'égalité des chances", "donner les mêmes chances à tous"),
    ("stimuler l'économie", "aider les entreprises à mieux travailler"),
    ("stimuler l'economie", "aider les entreprises à mieux travailler"),
    ("avoir un impact considérable", "changer beaucoup"),
    ("contribuer à l'amélioration de", "aider à améliorer"),
    ("contribuer à l'amelioration de", "aider à améliorer"),
    ("un secteur en pleine expansion", "un secteur qui grandit vite"),
];

static PHRASAL_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    PHRASAL_SUBSTITUTIONS
        .iter()
        .map(|(hard, easy)| {
            let body = regex::escape(hard).replace('\'', "['’]");
            let re = Regex::new(&format!(r"(?i)\b{}\b", body))
                .expect("phrasal pattern is a valid regex");
            (re, *easy)
        })
        .collect()
});

/// Whether phrase substitution applies to `target`.
fn applies_to(target: Option<CefrLevel>) -> bool {
    matches!(
        target,
        Some(CefrLevel::A1) | Some(CefrLevel::A2) | Some(CefrLevel::B1)
    )
}

/// Replace fixed expressions for A1, A2 and B1 targets.
pub fn apply_phrasal_rules(text: &str, target: Option<CefrLevel>) -> String {
    if !applies_to(target) {
        return text.to_string();
    }
    let mut out = text.to_string();
    for (re, easy) in PHRASAL_PATTERNS.iter() {
        out = re.replace_all(&out, NoExpand(*easy)).into_owned();
    }
    out
}

/// Phrase substitution stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhrasalStage;

impl RewriteStage for PhrasalStage {
    fn name(&self) -> &'static str {
        "phrasal"
    }

    fn rewrite(&self, text: &str, ctx: &RewriteContext<'_>) -> String {
        apply_phrasal_rules(text, ctx.target)
    }
}
